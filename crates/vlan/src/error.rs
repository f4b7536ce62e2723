use thiserror::Error;

/// Errors returned by VLAN table operations.
///
/// Every failing operation leaves the registry exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlanError {
	/// An argument was invalid, or the requested ID is not in the table.
	#[error("invalid parameter")]
	InvalidParam,
	/// The operation is not available in this build or on this table.
	#[error("operation not supported")]
	NotSupported,
	/// The active table has no slots.
	#[error("VLAN table is empty")]
	ObjectEmpty,
	/// A setup buffer cannot hold the records already in use.
	#[error("VLAN table too short: {required} records in use, buffer holds {capacity}")]
	TableTooShort { required: usize, capacity: usize },
	/// Every slot of the dynamic table is occupied.
	#[error("VLAN table overflow: all {capacity} records in use")]
	TableOverflow { capacity: usize },
	/// A dynamic-only operation ran before a dynamic table was set up.
	#[error("dynamic VLAN table not set up")]
	TableNotSetup,
}

impl VlanError {
	/// Numeric code of this error in the C ABI (`0` is success).
	pub const fn code(self) -> u8 {
		match self {
			Self::InvalidParam => 1,
			Self::NotSupported => 2,
			Self::ObjectEmpty => 4,
			Self::TableTooShort { .. } => 5,
			Self::TableOverflow { .. } => 6,
			Self::TableNotSetup => 7,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_match_abi() {
		assert_eq!(VlanError::InvalidParam.code(), 1);
		assert_eq!(VlanError::NotSupported.code(), 2);
		assert_eq!(VlanError::ObjectEmpty.code(), 4);
		assert_eq!(VlanError::TableTooShort { required: 2, capacity: 1 }.code(), 5);
		assert_eq!(VlanError::TableOverflow { capacity: 3 }.code(), 6);
		assert_eq!(VlanError::TableNotSetup.code(), 7);
	}
}

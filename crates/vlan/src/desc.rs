//! Descriptor and record types shared by the static and dynamic tables.

use core::ffi::c_void;
use core::ptr::NonNull;

/// Opaque handle to an object produced by one of the [`VlanIfx`] hooks.
pub type VlanObject = NonNull<c_void>;

/// Creates an interface, producer or consumer object.
pub type VlanCreateFn = fn() -> Option<VlanObject>;

/// Destroys an object previously returned by the matching create hook.
pub type VlanDeleteFn = fn(VlanObject);

/// Numeric identifier of a VLAN.
///
/// IDs are assigned outside this crate (either by hand or by the ID
/// generator) and are treated as opaque 16-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VlanId(pub u16);

impl VlanId {
	/// Returns the underlying u16 value.
	#[inline]
	pub const fn as_u16(self) -> u16 {
		self.0
	}
}

impl From<u16> for VlanId {
	fn from(raw: u16) -> Self {
		Self(raw)
	}
}

impl core::fmt::Display for VlanId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "VlanId({})", self.0)
	}
}

/// Hooks a VLAN exposes for itself and its producer/consumer endpoints.
///
/// The registry stores and copies these around but never calls them.
#[derive(Clone, Copy)]
pub struct VlanIfx {
	/// Creates the interface object.
	pub create: VlanCreateFn,
	/// Deletes the interface object.
	pub delete: VlanDeleteFn,
	/// Creates a producer endpoint.
	pub create_producer: VlanCreateFn,
	/// Deletes a producer endpoint.
	pub delete_producer: VlanDeleteFn,
	/// Creates a consumer endpoint.
	pub create_consumer: VlanCreateFn,
	/// Deletes a consumer endpoint.
	pub delete_consumer: VlanDeleteFn,
}

impl core::fmt::Debug for VlanIfx {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("VlanIfx")
			.field("create", &(self.create as *const ()))
			.field("delete", &(self.delete as *const ()))
			.finish_non_exhaustive()
	}
}

/// Named, ID-keyed description of one VLAN.
///
/// The registering module owns the descriptor. Tables only hold references
/// to it, and [`select`](crate::VlanRegistry::select) hands out copies.
#[derive(Debug, Clone, Copy)]
pub struct VlanDesc<'a> {
	/// Interface hooks.
	pub ifx: &'a VlanIfx,
	/// Human-readable VLAN name.
	pub name: &'a str,
	/// Numeric ID used for lookups.
	pub id: VlanId,
}

impl<'a> VlanDesc<'a> {
	/// Creates a descriptor.
	pub const fn new(ifx: &'a VlanIfx, name: &'a str, id: VlanId) -> Self {
		Self { ifx, name, id }
	}
}

/// Two descriptors are equal when they share the same hook table, name and ID.
impl PartialEq for VlanDesc<'_> {
	fn eq(&self, other: &Self) -> bool {
		core::ptr::eq(self.ifx, other.ifx) && self.name == other.name && self.id == other.id
	}
}

impl Eq for VlanDesc<'_> {}

/// One slot of a VLAN table. `None` marks an empty slot.
pub type Record<'a> = Option<&'a VlanDesc<'a>>;

/// Width of a single record in bytes.
pub const RECORD_SIZE: usize = core::mem::size_of::<Record<'static>>();

/// Byte size of a table holding `records` slots.
pub const fn table_size(records: usize) -> usize {
	RECORD_SIZE * records
}

/// Number of whole records that fit in `bytes`.
pub const fn record_capacity(bytes: usize) -> usize {
	bytes / RECORD_SIZE
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_is_pointer_sized() {
		assert_eq!(RECORD_SIZE, core::mem::size_of::<usize>());
		assert_eq!(table_size(3), 3 * core::mem::size_of::<usize>());
		assert_eq!(record_capacity(table_size(3) + 1), 3);
		assert_eq!(record_capacity(0), 0);
	}
}

//! Carving dynamic tables out of raw memory.
//!
//! Any `&mut [Record]` can back the dynamic table. Boards that reserve a RAM
//! region for it only have bytes, so [`records_from_bytes`] turns such a
//! region into record slots.

use crate::desc::{RECORD_SIZE, Record};
use crate::error::VlanError;

/// Reinterprets a byte region as empty record slots.
///
/// The region is zero-filled first, which is the bit pattern of an empty
/// record. Trailing bytes that do not form a whole record are left unused.
/// Fails with [`VlanError::InvalidParam`] if the region is not aligned for
/// pointer access.
pub fn records_from_bytes<'a, 'd>(bytes: &'a mut [u8]) -> Result<&'a mut [Record<'d>], VlanError> {
	if bytes.as_ptr().align_offset(core::mem::align_of::<Record<'d>>()) != 0 {
		tracing::warn!(
			addr = bytes.as_ptr() as usize,
			"VLAN buffer is not pointer aligned"
		);
		return Err(VlanError::InvalidParam);
	}

	bytes.fill(0);
	let count = bytes.len() / RECORD_SIZE;
	let ptr = bytes.as_mut_ptr().cast::<Record<'d>>();

	// SAFETY: `ptr` is aligned (checked above) and covers `count` whole
	// records inside `bytes`, which is exclusively borrowed for `'a`. All
	// bytes are zero and the all-zero pattern of `Option<&T>` is `None`.
	Ok(unsafe { core::slice::from_raw_parts_mut(ptr, count) })
}

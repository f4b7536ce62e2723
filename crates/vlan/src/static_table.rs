//! Link-time VLAN table.
//!
//! Every [`register_vlan!`](crate::register_vlan) invocation in the final
//! binary contributes one record to [`VLAN_TABLE`]. The linker gathers those
//! records into a single contiguous array bracketed by start/stop symbols,
//! which `linkme` exposes as an ordinary slice. Entry order is chosen by the
//! linker and carries no meaning.

use linkme::distributed_slice;

use crate::desc::{RECORD_SIZE, VlanDesc};

/// Records placed into the VLAN link section.
#[distributed_slice]
pub static VLAN_TABLE: [&'static VlanDesc<'static>];

/// Start and one-past-the-end addresses of a record array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWindow {
	/// Address of the first slot.
	pub start: *const (),
	/// Address one past the last slot.
	pub end: *const (),
}

impl TableWindow {
	pub(crate) fn of<T>(slots: &[T]) -> Self {
		let range = slots.as_ptr_range();
		Self {
			start: range.start.cast(),
			end: range.end.cast(),
		}
	}

	/// Size of the window in bytes.
	pub fn len_bytes(&self) -> usize {
		(self.end as usize).saturating_sub(self.start as usize)
	}

	/// Number of records the window spans.
	pub fn record_count(&self) -> usize {
		self.len_bytes() / RECORD_SIZE
	}

	/// Returns true if start and end coincide.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Read-only view of a statically populated VLAN table.
#[derive(Debug, Clone, Copy)]
pub struct StaticTable<'a> {
	records: &'a [&'a VlanDesc<'a>],
}

impl StaticTable<'static> {
	/// The table the linker assembled from [`VLAN_TABLE`].
	pub fn linked() -> Self {
		Self { records: &VLAN_TABLE }
	}

	/// A table without any records.
	pub const fn empty() -> Self {
		Self { records: &[] }
	}
}

impl<'a> StaticTable<'a> {
	/// Wraps an explicit list of descriptors.
	///
	/// Targets without link-section support build their table this way.
	pub const fn new(records: &'a [&'a VlanDesc<'a>]) -> Self {
		Self { records }
	}

	/// Number of records in the table.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if the table has no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the records in table order.
	pub fn records(&self) -> &'a [&'a VlanDesc<'a>] {
		self.records
	}

	/// Returns an iterator over the descriptors in table order.
	pub fn iter(&self) -> impl Iterator<Item = &'a VlanDesc<'a>> + 'a {
		self.records.iter().copied()
	}

	/// Boundaries of the table.
	pub fn window(&self) -> TableWindow {
		TableWindow::of(self.records)
	}
}

impl Default for StaticTable<'static> {
	fn default() -> Self {
		Self::linked()
	}
}

//! VLAN registry: the static table plus an optional dynamic table.
//!
//! A registry starts out serving its [`StaticTable`]. Calling
//! [`VlanRegistry::setup`] installs a caller-supplied buffer as the dynamic
//! table. Every record already in use is copied into it, and from then on
//! lookups and mutations address that buffer. Occupied dynamic slots always
//! form the prefix `[0, used)`; every slot after it is empty.
//!
//! The registry only ever stores references. Descriptors and buffers are
//! borrowed for the registry lifetime `'a`, so neither can be dropped or
//! moved while the registry may still hand them out.

use crate::desc::{Record, VlanDesc, VlanId};
use crate::error::VlanError;
use crate::static_table::{StaticTable, TableWindow};


/// Table currently served by a [`VlanRegistry`].
#[derive(Debug)]
pub enum ActiveTable<'a> {
	/// The static table. A registry in this state is uninitialized.
	Static,
	/// A caller-supplied dynamic table.
	Dynamic(&'a mut [Record<'a>]),
}

/// Registry of VLAN descriptors.
///
/// Mutating operations take `&mut self`. A registry shared between execution
/// contexts must be wrapped in a lock by its owner.
#[derive(Debug)]
pub struct VlanRegistry<'a> {
	static_table: StaticTable<'a>,
	active: ActiveTable<'a>,
	used: usize,
}

impl Default for VlanRegistry<'_> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> VlanRegistry<'a> {
	/// Creates a registry over the link-time table.
	pub fn new() -> Self {
		Self::with_static_table(StaticTable::linked())
	}

	/// Creates a registry over an explicit static table.
	pub fn with_static_table(static_table: StaticTable<'a>) -> Self {
		Self {
			static_table,
			active: ActiveTable::Static,
			used: 0,
		}
	}

	/// Returns the static table this registry was built over.
	pub fn static_table(&self) -> StaticTable<'a> {
		self.static_table
	}

	/// Returns true while the static table is the active one.
	pub fn is_uninitialized(&self) -> bool {
		matches!(self.active, ActiveTable::Static)
	}

	/// Installs `buffer` as the dynamic table.
	///
	/// The buffer is cleared, then the records in use are copied into it in
	/// order. While uninitialized, every static record counts as in use.
	/// Returns the dynamic buffer that was active before, if any.
	///
	/// Fails with [`VlanError::TableTooShort`] if the buffer cannot hold the
	/// records in use. The active table is untouched in that case.
	pub fn setup(
		&mut self,
		buffer: &'a mut [Record<'a>],
	) -> Result<Option<&'a mut [Record<'a>]>, VlanError> {
		dynamic_enabled()?;

		let required = self.used_count();
		let capacity = buffer.len();
		if capacity < required {
			tracing::warn!(required, capacity, "VLAN table setup rejected: buffer too short");
			return Err(VlanError::TableTooShort { required, capacity });
		}

		buffer.fill(None);
		match &self.active {
			ActiveTable::Static => {
				for (slot, &desc) in buffer.iter_mut().zip(self.static_table.records()) {
					*slot = Some(desc);
				}
			}
			ActiveTable::Dynamic(old) => buffer[..required].copy_from_slice(&old[..required]),
		}

		let previous = core::mem::replace(&mut self.active, ActiveTable::Dynamic(buffer));
		self.used = required;
		tracing::debug!(used = required, capacity, "VLAN dynamic table installed");

		Ok(match previous {
			ActiveTable::Static => None,
			ActiveTable::Dynamic(old) => Some(old),
		})
	}

	/// Appends `desc` to the dynamic table.
	///
	/// No uniqueness check is made: if the ID is already present,
	/// [`select`](Self::select) keeps returning the earlier record.
	pub fn register(&mut self, desc: &'a VlanDesc<'a>) -> Result<(), VlanError> {
		dynamic_enabled()?;

		let ActiveTable::Dynamic(slots) = &mut self.active else {
			return Err(VlanError::TableNotSetup);
		};

		let capacity = slots.len();
		if self.used >= capacity {
			tracing::warn!(id = %desc.id, name = desc.name, capacity, "VLAN table overflow");
			return Err(VlanError::TableOverflow { capacity });
		}

		slots[self.used] = Some(desc);
		tracing::debug!(id = %desc.id, name = desc.name, slot = self.used, "VLAN registered");
		self.used += 1;
		Ok(())
	}

	/// Removes the first record with `id` from the dynamic table.
	///
	/// Later records shift down one slot and the freed trailing slot is
	/// cleared. Records migrated from the static table are not told apart
	/// from registered ones; removing them is the caller's responsibility.
	///
	/// There is no set-up guard and no `dynamic` feature gate. While the
	/// static table is active nothing can be removed, so every ID fails with
	/// [`VlanError::InvalidParam`].
	pub fn unregister(&mut self, id: VlanId) -> Result<(), VlanError> {
		let ActiveTable::Dynamic(slots) = &mut self.active else {
			tracing::debug!(%id, "VLAN unregister rejected: static table active");
			return Err(VlanError::InvalidParam);
		};

		let index = slots
			.iter()
			.position(|record| record.is_some_and(|desc| desc.id == id))
			.ok_or(VlanError::InvalidParam)?;

		slots.copy_within(index + 1.., index);
		if let Some(last) = slots.last_mut() {
			*last = None;
		}
		self.used = self.used.saturating_sub(1);
		tracing::debug!(%id, slot = index, used = self.used, "VLAN unregistered");
		Ok(())
	}

	/// Returns a copy of the first descriptor with `id` in the active table.
	///
	/// Fails with [`VlanError::ObjectEmpty`] if the active table has no slots
	/// and with [`VlanError::InvalidParam`] if no record matches.
	pub fn select(&self, id: VlanId) -> Result<VlanDesc<'a>, VlanError> {
		if self.record_max_count() == 0 {
			return Err(VlanError::ObjectEmpty);
		}

		let desc = self
			.records()
			.find(|desc| desc.id == id)
			.ok_or(VlanError::InvalidParam)?;
		tracing::trace!(%id, name = desc.name, "VLAN selected");
		Ok(*desc)
	}

	/// Returns true if the active table holds a record with `id`.
	pub fn contains(&self, id: VlanId) -> bool {
		self.records().any(|desc| desc.id == id)
	}

	/// Checks that a record with the ID of `desc` is in the active table.
	///
	/// Unlike the other dynamic queries this works on the static table too.
	pub fn is_registered(&self, desc: &VlanDesc<'_>) -> Result<(), VlanError> {
		if self.contains(desc.id) {
			Ok(())
		} else {
			Err(VlanError::InvalidParam)
		}
	}

	/// Number of empty slots in the dynamic table.
	pub fn free_count(&self) -> Result<usize, VlanError> {
		dynamic_enabled()?;
		match &self.active {
			ActiveTable::Static => Err(VlanError::TableNotSetup),
			ActiveTable::Dynamic(slots) => Ok(slots.len() - self.used_count()),
		}
	}

	/// Total number of slots in the dynamic table.
	pub fn all_count(&self) -> Result<usize, VlanError> {
		dynamic_enabled()?;
		match &self.active {
			ActiveTable::Static => Err(VlanError::TableNotSetup),
			ActiveTable::Dynamic(slots) => Ok(slots.len()),
		}
	}

	/// Number of records in use in the active table.
	pub fn used_count(&self) -> usize {
		match &self.active {
			ActiveTable::Static => self.static_table.len(),
			ActiveTable::Dynamic(slots) => self.used.min(slots.len()),
		}
	}

	/// Iterates over the live records of the active table in slot order.
	pub fn records(&self) -> Records<'_, 'a> {
		let inner = match &self.active {
			ActiveTable::Static => RecordsInner::Static(self.static_table.records().iter()),
			ActiveTable::Dynamic(slots) => RecordsInner::Dynamic(slots.iter()),
		};
		Records { inner }
	}

	/// Raw slots of the dynamic table, empty ones included.
	pub fn dynamic_slots(&self) -> Option<&[Record<'a>]> {
		match &self.active {
			ActiveTable::Static => None,
			ActiveTable::Dynamic(slots) => Some(&slots[..]),
		}
	}

	/// Boundaries of the active table.
	pub fn window(&self) -> TableWindow {
		match &self.active {
			ActiveTable::Static => self.static_table.window(),
			ActiveTable::Dynamic(slots) => TableWindow::of(&slots[..]),
		}
	}

	/// Address of the first slot of the active table.
	pub fn table_addr(&self) -> *const () {
		self.window().start
	}

	/// Number of slots in the active table.
	pub fn record_max_count(&self) -> usize {
		match &self.active {
			ActiveTable::Static => self.static_table.len(),
			ActiveTable::Dynamic(slots) => slots.len(),
		}
	}

	/// Repoints the active table without clearing or migrating anything.
	///
	/// The used count is kept as is, so records in the replaced table stop
	/// being selectable. Meant for teardown and test harnesses restoring a
	/// table returned by an earlier call. Returns the table it replaced.
	pub fn force_set(&mut self, table: ActiveTable<'a>) -> ActiveTable<'a> {
		let previous = core::mem::replace(&mut self.active, table);
		tracing::debug!(
			capacity = self.record_max_count(),
			used = self.used,
			"VLAN table force-set"
		);
		previous
	}
}

fn dynamic_enabled() -> Result<(), VlanError> {
	if cfg!(feature = "dynamic") {
		Ok(())
	} else {
		Err(VlanError::NotSupported)
	}
}

/// Iterator over the live records of a [`VlanRegistry`].
pub struct Records<'r, 'a> {
	inner: RecordsInner<'r, 'a>,
}

enum RecordsInner<'r, 'a> {
	Static(core::slice::Iter<'a, &'a VlanDesc<'a>>),
	Dynamic(core::slice::Iter<'r, Record<'a>>),
}

impl<'a> Iterator for Records<'_, 'a> {
	type Item = &'a VlanDesc<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.inner {
			RecordsInner::Static(iter) => iter.next().copied(),
			RecordsInner::Dynamic(iter) => iter.find_map(|record| *record),
		}
	}
}

//! VLAN descriptor registry.
//!
//! A VLAN is a logical interface adapter described by a [`VlanDesc`]: a name,
//! a numeric [`VlanId`] and a [`VlanIfx`] hook table for creating the
//! interface and its producer/consumer endpoints. This crate keeps track of
//! those descriptors and resolves IDs back to them:
//!
//! - [`register_vlan!`] places descriptors into the link-time
//!   [`VLAN_TABLE`], visible as one contiguous [`StaticTable`].
//! - [`VlanRegistry`] serves lookups from that table and, once
//!   [`setup`](VlanRegistry::setup) is given a buffer, from a dynamic table
//!   that also accepts runtime registrations.
//!
//! The registry never calls the hooks and never owns the descriptors.
//!
//! # Features
//!
//! - `std` (default): `std` support for the error and logging crates.
//!   Without it the crate is `no_std`.
//! - `dynamic` (default): the dynamic table. Without it `setup`, `register`,
//!   `free_count` and `all_count` fail with [`VlanError::NotSupported`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod buffer;
mod desc;
mod error;
mod macros;
mod registry;
mod static_table;

pub use buffer::records_from_bytes;
pub use desc::{
	RECORD_SIZE, Record, VlanCreateFn, VlanDeleteFn, VlanDesc, VlanId, VlanIfx, VlanObject,
	record_capacity, table_size,
};
pub use error::VlanError;
pub use registry::{ActiveTable, Records, VlanRegistry};
pub use static_table::{StaticTable, TableWindow, VLAN_TABLE};

#[doc(hidden)]
pub mod __private {
	pub use {linkme, paste};
}

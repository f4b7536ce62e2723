//! Static registration with IDs taken from generator-style constants.

#![allow(unused_crate_dependencies)]

use routeit_vlan::{StaticTable, VlanId, VlanIfx, VlanObject, VlanRegistry, register_vlan};

/// Stand-in for the header emitted by the VLAN ID generator.
mod vlan_ids {
	pub const VLANID_AUTO_VLAN1: u16 = 0x0100;
	pub const VLANID_AUTO_VLAN2: u16 = 0x0101;
}

use vlan_ids::*;

fn create_none() -> Option<VlanObject> {
	None
}

fn delete_noop(_: VlanObject) {}

static MOCK1_IFX: VlanIfx = VlanIfx {
	create: create_none,
	delete: delete_noop,
	create_producer: create_none,
	delete_producer: delete_noop,
	create_consumer: create_none,
	delete_consumer: delete_noop,
};

static MOCK2_IFX: VlanIfx = VlanIfx {
	create: create_none,
	delete: delete_noop,
	create_producer: create_none,
	delete_producer: delete_noop,
	create_consumer: create_none,
	delete_consumer: delete_noop,
};

register_vlan!(&MOCK1_IFX, AUTO_VLAN1);
register_vlan!(&MOCK2_IFX, AUTO_VLAN2);

#[test]
fn select_generated_ids() {
	let registry = VlanRegistry::new();

	let desc = registry.select(VlanId(VLANID_AUTO_VLAN1)).unwrap();
	assert!(std::ptr::eq(desc.ifx, &MOCK1_IFX));
	assert_eq!(desc.name, "AUTO_VLAN1");
	assert_eq!(desc.id, VlanId(VLANID_AUTO_VLAN1));

	let desc = registry.select(VlanId(VLANID_AUTO_VLAN2)).unwrap();
	assert!(std::ptr::eq(desc.ifx, &MOCK2_IFX));
	assert_eq!(desc.name, "AUTO_VLAN2");
	assert_eq!(desc.id, VlanId(VLANID_AUTO_VLAN2));
}

#[test]
fn generated_descriptors_are_linked() {
	assert_eq!(StaticTable::linked().len(), 2);
	assert_eq!(VLAN_AUTO_VLAN1.id, VlanId(0x0100));
	assert!(VlanRegistry::new().contains(VLAN_AUTO_VLAN2.id));
}

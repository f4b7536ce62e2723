/// Registers a VLAN in the link-time table.
///
/// Declares a `VLAN_<NAME>` descriptor named after `NAME` and places a
/// reference to it into [`VLAN_TABLE`](crate::VLAN_TABLE).
///
/// With an explicit ID:
///
/// ```ignore
/// register_vlan!(&UART_IFX, UART, 7);
/// ```
///
/// Without one, the ID is read from a `VLANID_<NAME>: u16` constant that must
/// be in scope, as emitted by the VLAN ID generator:
///
/// ```ignore
/// include!(concat!(env!("OUT_DIR"), "/vlan_ids.rs"));
/// register_vlan!(&UART_IFX, UART);
/// ```
#[macro_export]
macro_rules! register_vlan {
	($ifx:expr, $name:ident, $id:expr) => {
		$crate::__private::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<VLAN_ $name>]: $crate::VlanDesc<'static> =
				$crate::VlanDesc::new($ifx, stringify!($name), $crate::VlanId($id));

			#[$crate::__private::linkme::distributed_slice($crate::VLAN_TABLE)]
			#[linkme(crate = $crate::__private::linkme)]
			#[allow(non_upper_case_globals)]
			static [<VLAN_ $name _RECORD>]: &'static $crate::VlanDesc<'static> = &[<VLAN_ $name>];
		}
	};
	($ifx:expr, $name:ident) => {
		$crate::__private::paste::paste! {
			$crate::register_vlan!($ifx, $name, [<VLANID_ $name>]);
		}
	};
}

//! pvlanmgrd - Private VLAN manager daemon for distributed virtual switches
//!
//! Resolves the effective PVLAN role of VLAN id pairs against a switch's
//! primary/secondary mapping snapshot, for the provisioning logic that
//! creates and updates port groups.

mod pvlan_mgr;
mod resolver;

pub use pvlan_mgr::PvlanMgr;
pub use resolver::resolve_pvlan_roles;

// Snapshot vocabulary shared with the other DVS managers
pub use dvs_mgr_common::{PvlanMap, PvlanMapEntry, PvlanRoles, PvlanType};

//! Effective PVLAN role resolution.
//!
//! Given a switch's PVLAN mapping snapshot and a pair of VLAN ids under
//! query, determine the effective role of each id. An id acting as the
//! parent of any relationship is promiscuous; an id appearing as a child
//! takes the kind declared by that entry. The same id may appear in both
//! positions across entries, in which case promiscuous wins.

use dvs_mgr_common::pvlan::{PvlanMapEntry, PvlanRoles, PvlanType};

/// Scan state shared by both query ids across a single pass over the map.
///
/// Both ids are resolved in one cumulative scan rather than two
/// independent passes; role lookups are keyed by id, so equal query ids
/// collapse onto a single result key.
struct RoleScan {
    vlan_id: i32,
    secondary_vlan_id: i32,
    roles: PvlanRoles,
}

impl RoleScan {
    fn new(vlan_id: i32, secondary_vlan_id: i32) -> Self {
        Self {
            vlan_id,
            secondary_vlan_id,
            roles: PvlanRoles::new(),
        }
    }

    /// Records a promiscuous classification. Always written: an id seen
    /// as a parent is promiscuous no matter what an earlier child entry
    /// declared for it.
    fn record_promiscuous(&mut self, id: i32) {
        self.roles.insert(id, PvlanType::Promiscuous);
    }

    /// Records a child classification from a cross entry. A promiscuous
    /// classification already on record is kept; between child roles the
    /// later entry wins.
    fn record_declared(&mut self, id: i32, kind: PvlanType) {
        if self.roles.get(&id) != Some(&PvlanType::Promiscuous) {
            self.roles.insert(id, kind);
        }
    }

    fn apply(&mut self, entry: &PvlanMapEntry) {
        if entry.is_promiscuous_pair() {
            // Self-referential entry: declares the promiscuous VLAN of a
            // domain. The declared kind is ignored for equal ids.
            if self.vlan_id == entry.primary_vlan_id {
                self.record_promiscuous(self.vlan_id);
            } else if self.secondary_vlan_id != self.vlan_id
                && self.secondary_vlan_id == entry.primary_vlan_id
            {
                self.record_promiscuous(self.secondary_vlan_id);
            }
        } else {
            if self.vlan_id == entry.primary_vlan_id {
                self.record_promiscuous(self.vlan_id);
            } else if self.vlan_id == entry.secondary_vlan_id {
                self.record_declared(self.vlan_id, entry.pvlan_type);
            }
            if self.secondary_vlan_id != self.vlan_id {
                if self.secondary_vlan_id == entry.primary_vlan_id {
                    self.record_promiscuous(self.secondary_vlan_id);
                } else if self.secondary_vlan_id == entry.secondary_vlan_id {
                    self.record_declared(self.secondary_vlan_id, entry.pvlan_type);
                }
            }
        }
    }

    /// The scan is settled once both query ids are resolved and the first
    /// id holds a non-promiscuous role. While the first id is promiscuous
    /// or unresolved, later entries are still scanned: the promiscuous
    /// classification can only be re-confirmed, and the remaining id may
    /// still gain a role.
    fn is_settled(&self) -> bool {
        match self.roles.get(&self.vlan_id) {
            Some(PvlanType::Promiscuous) | None => false,
            Some(_) => self.roles.contains_key(&self.secondary_vlan_id),
        }
    }
}

/// Resolves the effective PVLAN roles of two VLAN ids against a switch's
/// mapping snapshot.
///
/// Entries are scanned in snapshot order; ids absent from the result are
/// not governed by any PVLAN relationship. The two ids may be equal, in
/// which case the result holds at most one key. The scan stops early once
/// no further entry can change the answer for the queried pair; the early
/// exit affects only how much of the map is visited, not the roles
/// reported for management-plane-ordered maps.
///
/// Pure and infallible: ids are compared exactly as given, with no range
/// interpretation.
pub fn resolve_pvlan_roles(
    entries: &[PvlanMapEntry],
    vlan_id: i32,
    secondary_vlan_id: i32,
) -> PvlanRoles {
    let (roles, _) = scan(entries, vlan_id, secondary_vlan_id, true);
    roles
}

/// Runs the scan, optionally without the early exit, and reports how many
/// entries were visited.
fn scan(
    entries: &[PvlanMapEntry],
    vlan_id: i32,
    secondary_vlan_id: i32,
    early_exit: bool,
) -> (PvlanRoles, usize) {
    let mut state = RoleScan::new(vlan_id, secondary_vlan_id);
    let mut visited = 0;

    for entry in entries {
        state.apply(entry);
        visited += 1;
        if early_exit && state.is_settled() {
            break;
        }
    }

    (state.roles, visited)
}

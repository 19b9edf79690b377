//! PvlanMgr - PVLAN role resolution manager
//!
//! Resolution flow:
//! 1. Fetch the switch's PVLAN mapping snapshot through the config source
//! 2. Resolve the queried pair of VLAN ids against the snapshot
//! 3. Return the role map to the port-group provisioning logic

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use dvs_mgr_common::{is_valid_vlan_id, DvsConfigSource, DvsMgrResult, PvlanRoles, PvlanType};

use crate::resolver::resolve_pvlan_roles;

/// PvlanMgr resolves effective PVLAN roles for port-group provisioning.
///
/// Holds no snapshot state of its own; every resolution re-fetches the
/// switch configuration through the source, which owns caching and
/// staleness policy.
pub struct PvlanMgr {
    source: Arc<dyn DvsConfigSource>,
}

impl PvlanMgr {
    /// Creates a manager over a configuration source.
    pub fn new(source: Arc<dyn DvsConfigSource>) -> Self {
        Self { source }
    }

    /// Resolves the effective PVLAN roles of a VLAN id pair on a switch.
    ///
    /// Ids missing from the returned map are not governed by any PVLAN
    /// relationship on the switch; callers treat them as regular VLANs.
    /// Out-of-range ids are logged and resolved as-is, since entries are
    /// matched exactly as the management plane reports them.
    #[instrument(skip(self))]
    pub async fn resolve_roles(
        &self,
        switch: &str,
        vlan_id: i32,
        secondary_vlan_id: i32,
    ) -> DvsMgrResult<PvlanRoles> {
        if !is_valid_vlan_id(vlan_id) {
            warn!("VLAN id {} outside the 802.1Q range, resolving as-is", vlan_id);
        }
        if secondary_vlan_id != vlan_id && !is_valid_vlan_id(secondary_vlan_id) {
            warn!(
                "VLAN id {} outside the 802.1Q range, resolving as-is",
                secondary_vlan_id
            );
        }

        let map = self.source.pvlan_map(switch).await?;
        if map.is_empty() {
            debug!("No PVLAN mapping configured on {}", switch);
            return Ok(PvlanRoles::new());
        }

        let roles = resolve_pvlan_roles(map.entries(), vlan_id, secondary_vlan_id);
        info!(
            "Resolved {} queried id(s) against {} PVLAN entries on {}",
            roles.len(),
            map.len(),
            switch
        );
        Ok(roles)
    }

    /// Resolves a single VLAN id, for callers probing one VLAN before
    /// provisioning. `None` means no PVLAN relationship governs the id.
    pub async fn role_of(&self, switch: &str, vlan_id: i32) -> DvsMgrResult<Option<PvlanType>> {
        let roles = self.resolve_roles(switch, vlan_id, vlan_id).await?;
        Ok(roles.get(&vlan_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dvs_mgr_common::{DvsMgrError, PvlanMap, PvlanMapEntry, StaticConfigSource};

    struct FailingSource;

    #[async_trait]
    impl DvsConfigSource for FailingSource {
        async fn pvlan_map(&self, switch: &str) -> DvsMgrResult<PvlanMap> {
            Err(DvsMgrError::config_fetch(switch, "management plane unreachable"))
        }
    }

    fn manager_with_fixture() -> PvlanMgr {
        let mut source = StaticConfigSource::new();
        source.insert(PvlanMap::new(
            "dvSwitch0",
            vec![
                PvlanMapEntry::promiscuous(10),
                PvlanMapEntry::new(10, 20, PvlanType::Isolated),
                PvlanMapEntry::new(10, 30, PvlanType::Community),
            ],
        ));
        source.insert(PvlanMap::new("dvSwitch1", vec![]));
        PvlanMgr::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_resolve_roles_against_fixture() {
        let mgr = manager_with_fixture();

        let roles = mgr.resolve_roles("dvSwitch0", 20, 10).await.unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[&20], PvlanType::Isolated);
        assert_eq!(roles[&10], PvlanType::Promiscuous);
    }

    #[tokio::test]
    async fn test_resolve_roles_empty_switch() {
        let mgr = manager_with_fixture();

        let roles = mgr.resolve_roles("dvSwitch1", 10, 20).await.unwrap();
        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_switch_propagates() {
        let mgr = manager_with_fixture();

        let err = mgr.resolve_roles("dvSwitch9", 10, 20).await.unwrap_err();
        assert!(matches!(err, DvsMgrError::SwitchNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let mgr = PvlanMgr::new(Arc::new(FailingSource));

        let err = mgr.resolve_roles("dvSwitch0", 10, 20).await.unwrap_err();
        assert!(matches!(err, DvsMgrError::ConfigFetch { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_role_of() {
        let mgr = manager_with_fixture();

        let role = mgr.role_of("dvSwitch0", 30).await.unwrap();
        assert_eq!(role, Some(PvlanType::Community));

        let role = mgr.role_of("dvSwitch0", 99).await.unwrap();
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_out_of_range_ids_resolve_as_is() {
        let mgr = manager_with_fixture();

        // Logged at warn, then resolved exactly like any other id.
        let roles = mgr.resolve_roles("dvSwitch0", -1, 5000).await.unwrap();
        assert!(roles.is_empty());
    }
}

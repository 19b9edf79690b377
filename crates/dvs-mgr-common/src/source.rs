//! Switch configuration source seam.
//!
//! Manager daemons never talk to the hypervisor management plane directly;
//! they go through [`DvsConfigSource`], which hands out per-switch PVLAN
//! mapping snapshots. Fetch transport, caching, and staleness handling are
//! the implementor's concern.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{DvsMgrError, DvsMgrResult};
use crate::pvlan::PvlanMap;

/// Source of distributed virtual switch configuration.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; managers share one source across
/// concurrent resolution calls.
#[async_trait]
pub trait DvsConfigSource: Send + Sync {
    /// Returns the current PVLAN mapping snapshot for a switch.
    ///
    /// # Errors
    ///
    /// Returns [`DvsMgrError::SwitchNotFound`] for an unknown switch and
    /// [`DvsMgrError::ConfigFetch`] when the management plane cannot be
    /// reached.
    async fn pvlan_map(&self, switch: &str) -> DvsMgrResult<PvlanMap>;
}

/// In-memory configuration source.
///
/// Holds a fixed set of switch snapshots. Used as the daemon scaffold's
/// wiring point until the management-plane client lands, and by tests that
/// need a deterministic source.
#[derive(Debug, Default)]
pub struct StaticConfigSource {
    maps: HashMap<String, PvlanMap>,
}

impl StaticConfigSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the snapshot for the switch named in `map`.
    pub fn insert(&mut self, map: PvlanMap) {
        self.maps.insert(map.switch().to_string(), map);
    }

    /// Number of switches known to this source.
    pub fn switch_count(&self) -> usize {
        self.maps.len()
    }
}

#[async_trait]
impl DvsConfigSource for StaticConfigSource {
    async fn pvlan_map(&self, switch: &str) -> DvsMgrResult<PvlanMap> {
        self.maps
            .get(switch)
            .cloned()
            .ok_or_else(|| DvsMgrError::switch_not_found(switch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pvlan::PvlanMapEntry;

    #[tokio::test]
    async fn test_static_source_returns_inserted_map() {
        let mut source = StaticConfigSource::new();
        source.insert(PvlanMap::new(
            "dvSwitch0",
            vec![PvlanMapEntry::promiscuous(10)],
        ));
        assert_eq!(source.switch_count(), 1);

        let map = source.pvlan_map("dvSwitch0").await.unwrap();
        assert_eq!(map.switch(), "dvSwitch0");
        assert_eq!(map.len(), 1);
    }

    #[tokio::test]
    async fn test_static_source_unknown_switch() {
        let source = StaticConfigSource::new();
        let err = source.pvlan_map("dvSwitch9").await.unwrap_err();
        assert!(matches!(err, DvsMgrError::SwitchNotFound { .. }));
    }

    #[tokio::test]
    async fn test_insert_replaces_existing_snapshot() {
        let mut source = StaticConfigSource::new();
        source.insert(PvlanMap::new("dvSwitch0", vec![]));
        source.insert(PvlanMap::new(
            "dvSwitch0",
            vec![PvlanMapEntry::promiscuous(10)],
        ));
        assert_eq!(source.switch_count(), 1);

        let map = source.pvlan_map("dvSwitch0").await.unwrap();
        assert_eq!(map.len(), 1);
    }
}

//! Common infrastructure for distributed virtual switch (DVS) manager daemons.
//!
//! This crate provides the shared vocabulary and seams used by the DVS
//! manager daemons (pvlanmgrd today, portgroupmgrd and friends later):
//!
//! - [`pvlan`]: private VLAN mapping snapshot types
//! - [`source`]: the [`DvsConfigSource`] trait for fetching switch
//!   configuration from the hypervisor management plane
//! - [`error`]: error types for manager operations
//!
//! # Architecture
//!
//! Manager daemons follow this pattern:
//!
//! 1. Fetch the current switch configuration through a [`DvsConfigSource`]
//! 2. Run pure resolution/decision logic over the snapshot
//! 3. Hand the result to the provisioning layer that mutates the switch
//!
//! The snapshot types are read-only inputs; fetch mechanics, caching, and
//! staleness handling live behind the source trait.

pub mod error;
pub mod pvlan;
pub mod source;

// Re-export commonly used items at crate root
pub use error::{DvsMgrError, DvsMgrResult};
pub use pvlan::{
    is_valid_vlan_id, PvlanMap, PvlanMapEntry, PvlanRoles, PvlanType, MAX_VLAN_ID, MIN_VLAN_ID,
};
pub use source::{DvsConfigSource, StaticConfigSource};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid PVLAN kind: {0} (expected promiscuous, isolated, or community)")]
    InvalidPvlanKind(String),
}

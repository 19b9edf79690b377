//! Private VLAN (PVLAN) mapping snapshot types.
//!
//! A distributed virtual switch carries a list of PVLAN mapping entries,
//! each pairing a primary VLAN id with a secondary VLAN id and the role
//! declared for the secondary id. The list is fetched from the hypervisor
//! management plane as an ordered, read-only snapshot.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Minimum valid IEEE 802.1Q VLAN id.
pub const MIN_VLAN_ID: i32 = 1;

/// Maximum valid IEEE 802.1Q VLAN id.
pub const MAX_VLAN_ID: i32 = 4094;

/// Returns true if the id is inside the 802.1Q range (1-4094).
///
/// Snapshot entries and queries carry ids exactly as the management plane
/// reports them, so out-of-range values can reach the resolver; validation
/// is advisory and belongs to the configuration layer.
pub fn is_valid_vlan_id(id: i32) -> bool {
    (MIN_VLAN_ID..=MAX_VLAN_ID).contains(&id)
}

/// PVLAN role of a VLAN id within a private VLAN relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PvlanType {
    /// Can communicate with all other roles in the same primary VLAN.
    Promiscuous,
    /// Communicates with promiscuous ports only.
    Isolated,
    /// Communicates with promiscuous ports and its own community.
    Community,
}

impl FromStr for PvlanType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promiscuous" => Ok(PvlanType::Promiscuous),
            "isolated" => Ok(PvlanType::Isolated),
            "community" => Ok(PvlanType::Community),
            other => Err(ParseError::InvalidPvlanKind(other.to_string())),
        }
    }
}

impl PvlanType {
    /// Convert to the wire name used by the management plane.
    pub fn as_str(&self) -> &str {
        match self {
            PvlanType::Promiscuous => "promiscuous",
            PvlanType::Isolated => "isolated",
            PvlanType::Community => "community",
        }
    }
}

impl fmt::Display for PvlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared PVLAN relationship on a switch.
///
/// An entry whose primary and secondary ids are equal declares the
/// promiscuous VLAN of a PVLAN domain; the id is its own parent and its
/// effective role is promiscuous regardless of the declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvlanMapEntry {
    /// Parent VLAN id of the relationship.
    pub primary_vlan_id: i32,
    /// Child VLAN id; equals `primary_vlan_id` for the promiscuous entry.
    pub secondary_vlan_id: i32,
    /// Role declared for the secondary id within this relationship.
    pub pvlan_type: PvlanType,
}

impl PvlanMapEntry {
    /// Creates a new mapping entry.
    pub fn new(primary_vlan_id: i32, secondary_vlan_id: i32, pvlan_type: PvlanType) -> Self {
        Self {
            primary_vlan_id,
            secondary_vlan_id,
            pvlan_type,
        }
    }

    /// Creates the self-referential promiscuous entry for a primary VLAN.
    pub fn promiscuous(vlan_id: i32) -> Self {
        Self::new(vlan_id, vlan_id, PvlanType::Promiscuous)
    }

    /// Returns true if this entry declares a promiscuous VLAN
    /// (primary and secondary ids are equal).
    pub fn is_promiscuous_pair(&self) -> bool {
        self.primary_vlan_id == self.secondary_vlan_id
    }
}

/// Per-switch PVLAN mapping snapshot.
///
/// Entry order is the order reported by the management plane and is
/// significant to resolution. The snapshot is immutable input; it is
/// never retained across resolution calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PvlanMap {
    /// Name of the switch the snapshot was taken from.
    switch: String,
    /// Mapping entries in management-plane order.
    entries: Vec<PvlanMapEntry>,
}

impl PvlanMap {
    /// Creates a snapshot for a switch.
    pub fn new(switch: impl Into<String>, entries: Vec<PvlanMapEntry>) -> Self {
        Self {
            switch: switch.into(),
            entries,
        }
    }

    /// Name of the switch this snapshot belongs to.
    pub fn switch(&self) -> &str {
        &self.switch
    }

    /// Mapping entries in snapshot order.
    pub fn entries(&self) -> &[PvlanMapEntry] {
        &self.entries
    }

    /// Number of mapping entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the switch has no PVLAN configuration.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved PVLAN roles keyed by VLAN id.
///
/// A missing key means no PVLAN relationship governs that id; callers
/// treat it as a regular VLAN.
pub type PvlanRoles = HashMap<i32, PvlanType>;

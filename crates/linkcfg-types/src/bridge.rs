//! Bridge master configuration record.

use serde::{Deserialize, Serialize};

/// Bridge-wide settings carried by the kernel's bridge link kind.
///
/// The record is owner-held plain data: encode reads it, decode mutates it
/// in place. `vlan_default_pvid` is meaningful only while
/// `vlan_filtering_enabled` is set and is stored raw; 0 is a legal value
/// and means "no default PVID".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Spanning Tree Protocol toggle.
    pub stp_enabled: bool,
    /// Whether the bridge is VLAN-aware.
    pub vlan_filtering_enabled: bool,
    /// VLAN ID assigned to untagged ingress traffic.
    pub vlan_default_pvid: u16,
    /// Per-VLAN statistics collection.
    pub vlan_stats_enabled: bool,
    /// Per-VLAN statistics broken out per port.
    pub vlan_stats_per_port: bool,
}

//! Bond master configuration record and its value enums.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bonding mode (kernel `BOND_MODE_*` values).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum BondMode {
    /// Round-robin packet distribution.
    #[default]
    BalanceRr = 0,
    /// One active member, the rest on standby.
    ActiveBackup = 1,
    /// Hash-based member selection.
    BalanceXor = 2,
    /// Transmit on every member.
    Broadcast = 3,
    /// IEEE 802.3ad dynamic link aggregation (LACP).
    #[serde(rename = "802.3ad")]
    Ieee8023ad = 4,
    /// Adaptive transmit load balancing.
    BalanceTlb = 5,
    /// Adaptive load balancing (transmit and receive).
    BalanceAlb = 6,
}

impl BondMode {
    /// Kernel value for this mode.
    pub const fn as_kernel(&self) -> u8 {
        *self as u8
    }

    /// Maps a kernel `BOND_MODE_*` value back to a mode.
    pub const fn from_kernel(value: u8) -> Option<Self> {
        match value {
            0 => Some(BondMode::BalanceRr),
            1 => Some(BondMode::ActiveBackup),
            2 => Some(BondMode::BalanceXor),
            3 => Some(BondMode::Broadcast),
            4 => Some(BondMode::Ieee8023ad),
            5 => Some(BondMode::BalanceTlb),
            6 => Some(BondMode::BalanceAlb),
            _ => None,
        }
    }

    /// Returns true if the mode selects members via the transmit hash policy.
    pub const fn uses_xmit_hash(&self) -> bool {
        matches!(
            self,
            BondMode::BalanceXor | BondMode::Ieee8023ad | BondMode::BalanceTlb | BondMode::BalanceAlb
        )
    }

    /// Returns true if the mode runs LACP.
    pub const fn is_lacp(&self) -> bool {
        matches!(self, BondMode::Ieee8023ad)
    }
}

impl fmt::Display for BondMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BondMode::BalanceRr => "balance-rr",
            BondMode::ActiveBackup => "active-backup",
            BondMode::BalanceXor => "balance-xor",
            BondMode::Broadcast => "broadcast",
            BondMode::Ieee8023ad => "802.3ad",
            BondMode::BalanceTlb => "balance-tlb",
            BondMode::BalanceAlb => "balance-alb",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BondMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balance-rr" => Ok(BondMode::BalanceRr),
            "active-backup" => Ok(BondMode::ActiveBackup),
            "balance-xor" => Ok(BondMode::BalanceXor),
            "broadcast" => Ok(BondMode::Broadcast),
            "802.3ad" | "8023ad" => Ok(BondMode::Ieee8023ad),
            "balance-tlb" => Ok(BondMode::BalanceTlb),
            "balance-alb" => Ok(BondMode::BalanceAlb),
            _ => Err(ParseError::InvalidBondMode(s.to_string())),
        }
    }
}

/// LACPDU transmit rate requested from the partner in 802.3ad mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LacpRate {
    /// Partner LACPDUs every 30 seconds.
    #[default]
    Slow = 0,
    /// Partner LACPDUs every second.
    Fast = 1,
}

impl LacpRate {
    /// Kernel value for this rate.
    pub const fn as_kernel(&self) -> u8 {
        *self as u8
    }

    /// Maps a kernel LACP rate value back to a rate.
    pub const fn from_kernel(value: u8) -> Option<Self> {
        match value {
            0 => Some(LacpRate::Slow),
            1 => Some(LacpRate::Fast),
            _ => None,
        }
    }
}

impl fmt::Display for LacpRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LacpRate::Slow => "slow",
            LacpRate::Fast => "fast",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LacpRate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(LacpRate::Slow),
            "fast" => Ok(LacpRate::Fast),
            _ => Err(ParseError::InvalidLacpRate(s.to_string())),
        }
    }
}

/// Transmit hash policy for the hashing bond modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum XmitHashPolicy {
    /// Source/destination MAC addresses.
    #[default]
    #[serde(rename = "layer2")]
    Layer2 = 0,
    /// IP addresses plus transport ports.
    #[serde(rename = "layer3+4")]
    Layer34 = 1,
    /// MAC plus IP addresses.
    #[serde(rename = "layer2+3")]
    Layer23 = 2,
    /// Inner layer 2+3 headers of encapsulated traffic.
    #[serde(rename = "encap2+3")]
    Encap23 = 3,
    /// Inner layer 3+4 headers of encapsulated traffic.
    #[serde(rename = "encap3+4")]
    Encap34 = 4,
    /// VLAN ID plus source MAC.
    #[serde(rename = "vlan+srcmac")]
    VlanSrcMac = 5,
}

impl XmitHashPolicy {
    /// Kernel value for this policy.
    pub const fn as_kernel(&self) -> u8 {
        *self as u8
    }

    /// Maps a kernel hash policy value back to a policy.
    pub const fn from_kernel(value: u8) -> Option<Self> {
        match value {
            0 => Some(XmitHashPolicy::Layer2),
            1 => Some(XmitHashPolicy::Layer34),
            2 => Some(XmitHashPolicy::Layer23),
            3 => Some(XmitHashPolicy::Encap23),
            4 => Some(XmitHashPolicy::Encap34),
            5 => Some(XmitHashPolicy::VlanSrcMac),
            _ => None,
        }
    }
}

impl fmt::Display for XmitHashPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            XmitHashPolicy::Layer2 => "layer2",
            XmitHashPolicy::Layer34 => "layer3+4",
            XmitHashPolicy::Layer23 => "layer2+3",
            XmitHashPolicy::Encap23 => "encap2+3",
            XmitHashPolicy::Encap34 => "encap3+4",
            XmitHashPolicy::VlanSrcMac => "vlan+srcmac",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for XmitHashPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "layer2" => Ok(XmitHashPolicy::Layer2),
            "layer3+4" => Ok(XmitHashPolicy::Layer34),
            "layer2+3" => Ok(XmitHashPolicy::Layer23),
            "encap2+3" => Ok(XmitHashPolicy::Encap23),
            "encap3+4" => Ok(XmitHashPolicy::Encap34),
            "vlan+srcmac" => Ok(XmitHashPolicy::VlanSrcMac),
            _ => Err(ParseError::InvalidXmitHashPolicy(s.to_string())),
        }
    }
}

/// Bond master settings carried by the kernel's bond link kind.
///
/// Some fields only apply in certain configurations: `updelay` and
/// `downdelay` require MII monitoring (`miimon` nonzero), `lacp_rate`
/// applies in 802.3ad mode only, and `xmit_hash_policy` applies to the
/// hashing modes (see [`BondMode::uses_xmit_hash`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondConfig {
    /// Bonding mode.
    pub mode: BondMode,
    /// MII link monitoring interval in milliseconds (0 disables).
    pub miimon: u32,
    /// Milliseconds to wait before enabling a recovered member.
    pub updelay: u32,
    /// Milliseconds to wait before disabling a failed member.
    pub downdelay: u32,
    /// Use carrier state instead of MII ioctls for link detection.
    pub use_carrier: bool,
    /// Member-selection hash for the hashing modes.
    pub xmit_hash_policy: XmitHashPolicy,
    /// LACPDU rate in 802.3ad mode.
    pub lacp_rate: LacpRate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mode_kernel_values() {
        assert_eq!(BondMode::BalanceRr.as_kernel(), 0);
        assert_eq!(BondMode::ActiveBackup.as_kernel(), 1);
        assert_eq!(BondMode::Ieee8023ad.as_kernel(), 4);
        assert_eq!(BondMode::from_kernel(4), Some(BondMode::Ieee8023ad));
        assert_eq!(BondMode::from_kernel(6), Some(BondMode::BalanceAlb));
        assert_eq!(BondMode::from_kernel(7), None);
    }

    #[test]
    fn test_mode_classification() {
        assert!(BondMode::BalanceXor.uses_xmit_hash());
        assert!(BondMode::Ieee8023ad.uses_xmit_hash());
        assert!(!BondMode::ActiveBackup.uses_xmit_hash());
        assert!(!BondMode::BalanceRr.uses_xmit_hash());

        assert!(BondMode::Ieee8023ad.is_lacp());
        assert!(!BondMode::BalanceXor.is_lacp());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("802.3ad".parse::<BondMode>().unwrap(), BondMode::Ieee8023ad);
        assert_eq!(
            "Active-Backup".parse::<BondMode>().unwrap(),
            BondMode::ActiveBackup
        );
        assert!("round-robin".parse::<BondMode>().is_err());
    }

    #[test]
    fn test_lacp_rate_kernel_values() {
        assert_eq!(LacpRate::Slow.as_kernel(), 0);
        assert_eq!(LacpRate::Fast.as_kernel(), 1);
        assert_eq!(LacpRate::from_kernel(1), Some(LacpRate::Fast));
        assert_eq!(LacpRate::from_kernel(2), None);
    }

    #[test]
    fn test_hash_policy_kernel_values() {
        assert_eq!(XmitHashPolicy::Layer34.as_kernel(), 1);
        assert_eq!(XmitHashPolicy::from_kernel(2), Some(XmitHashPolicy::Layer23));
        assert_eq!(XmitHashPolicy::from_kernel(9), None);
    }

    #[test]
    fn test_hash_policy_parse_display() {
        assert_eq!(
            "layer3+4".parse::<XmitHashPolicy>().unwrap(),
            XmitHashPolicy::Layer34
        );
        assert_eq!(XmitHashPolicy::Encap23.to_string(), "encap2+3");
        assert!("layer5".parse::<XmitHashPolicy>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = BondConfig::default();
        assert_eq!(config.mode, BondMode::BalanceRr);
        assert_eq!(config.miimon, 0);
        assert!(!config.use_carrier);
    }
}

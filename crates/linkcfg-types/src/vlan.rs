//! VLAN identifier and VLAN sub-interface configuration.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IEEE 802.1Q VLAN identifier (1-4094).
///
/// VLAN 0 is reserved (priority tagged frames).
/// VLAN 4095 is reserved.
/// Valid range is 1-4094.
///
/// # Examples
///
/// ```
/// use linkcfg_types::VlanId;
///
/// let vlan = VlanId::new(100).unwrap();
/// assert_eq!(vlan.as_u16(), 100);
///
/// // Invalid VLAN IDs return errors
/// assert!(VlanId::new(0).is_err());
/// assert!(VlanId::new(4095).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// Minimum valid VLAN ID.
    pub const MIN: u16 = 1;

    /// Maximum valid VLAN ID.
    pub const MAX: u16 = 4094;

    /// Default VLAN ID (VLAN 1).
    pub const DEFAULT: VlanId = VlanId(1);

    /// Creates a new VLAN ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the VLAN ID is not in the valid range (1-4094).
    pub const fn new(id: u16) -> Result<Self, ParseError> {
        if id >= Self::MIN && id <= Self::MAX {
            Ok(VlanId(id))
        } else {
            Err(ParseError::InvalidVlanId(id))
        }
    }

    /// Returns the VLAN ID as a u16.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VlanId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u16 = s.parse().map_err(|_| ParseError::InvalidVlanId(0))?;
        VlanId::new(id)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ParseError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        VlanId::new(id)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> u16 {
        vlan.0
    }
}

/// VLAN encapsulation protocol, i.e. the ethertype of the tag header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VlanProtocol {
    /// IEEE 802.1Q customer tag (the common case).
    #[default]
    Dot1q,
    /// IEEE 802.1ad service tag (Q-in-Q outer header).
    Dot1ad,
}

impl VlanProtocol {
    /// Returns the ethertype the kernel carries for this protocol.
    pub const fn ethertype(&self) -> u16 {
        match self {
            VlanProtocol::Dot1q => 0x8100,
            VlanProtocol::Dot1ad => 0x88a8,
        }
    }

    /// Maps an ethertype back to a protocol.
    pub const fn from_ethertype(value: u16) -> Option<Self> {
        match value {
            0x8100 => Some(VlanProtocol::Dot1q),
            0x88a8 => Some(VlanProtocol::Dot1ad),
            _ => None,
        }
    }
}

impl fmt::Display for VlanProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VlanProtocol::Dot1q => "802.1q",
            VlanProtocol::Dot1ad => "802.1ad",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VlanProtocol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "802.1q" | "8021q" => Ok(VlanProtocol::Dot1q),
            "802.1ad" | "8021ad" => Ok(VlanProtocol::Dot1ad),
            _ => Err(ParseError::InvalidVlanProtocol(s.to_string())),
        }
    }
}

/// Settings of one 802.1Q/802.1ad VLAN sub-interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanLinkConfig {
    /// VLAN identifier carried in the tag.
    pub vlan_id: VlanId,
    /// Encapsulation protocol of the tag.
    pub protocol: VlanProtocol,
}

impl Default for VlanLinkConfig {
    fn default() -> Self {
        VlanLinkConfig {
            vlan_id: VlanId::DEFAULT,
            protocol: VlanProtocol::Dot1q,
        }
    }
}

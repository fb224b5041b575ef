//! Typed configuration records for kernel link devices.
//!
//! This crate provides the in-memory representations of the link kinds the
//! configuration layer manages, independent of how they travel on the wire:
//!
//! - [`BridgeConfig`]: bridge master settings (STP, VLAN filtering, PVID)
//! - [`VlanLinkConfig`]: 802.1Q/802.1ad VLAN sub-interface settings
//! - [`BondConfig`]: bond master settings (mode, MII monitoring, LACP)
//! - [`VlanId`]: validated IEEE 802.1Q VLAN identifier
//!
//! Records are plain data: owners hold and mutate them directly, and the
//! netlink marshaling lives in separate codec crates.

mod bond;
mod bridge;
mod vlan;

pub use bond::{BondConfig, BondMode, LacpRate, XmitHashPolicy};
pub use bridge::BridgeConfig;
pub use vlan::{VlanId, VlanLinkConfig, VlanProtocol};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),

    #[error("invalid VLAN protocol: {0}")]
    InvalidVlanProtocol(String),

    #[error("invalid bond mode: {0}")]
    InvalidBondMode(String),

    #[error("invalid LACP rate: {0}")]
    InvalidLacpRate(String),

    #[error("invalid transmit hash policy: {0}")]
    InvalidXmitHashPolicy(String),
}

//! Route netlink attribute constants (from `linux/if_link.h`).
//!
//! Only the attributes the link codecs actually speak are listed here;
//! this is not a full mirror of the kernel header.

/// Attribute header length: u16 length field plus u16 type field.
pub const NLA_HDRLEN: usize = 4;

/// Attributes are padded to this alignment within a stream.
pub const NLA_ALIGNTO: usize = 4;

/// Mask selecting the attribute type without its flag bits.
pub const NLA_TYPE_MASK: u16 = 0x3fff;

/// Flag bit marking a nested attribute.
pub const NLA_F_NESTED: u16 = 0x8000;

/// Flag bit marking a network-byte-order payload.
pub const NLA_F_NET_BYTEORDER: u16 = 0x4000;

/// Rounds `len` up to the attribute alignment boundary.
pub const fn nla_align(len: usize) -> usize {
    (len + NLA_ALIGNTO - 1) & !(NLA_ALIGNTO - 1)
}

// Bridge link attributes (IFLA_BR_*)

/// STP toggle, u32.
pub const IFLA_BR_STP_STATE: u16 = 5;
/// VLAN filtering toggle, u8.
pub const IFLA_BR_VLAN_FILTERING: u16 = 7;
/// Default PVID for untagged traffic, u16.
pub const IFLA_BR_VLAN_DEFAULT_PVID: u16 = 39;
/// Per-VLAN statistics toggle, u8.
pub const IFLA_BR_VLAN_STATS_ENABLED: u16 = 41;
/// Per-port VLAN statistics toggle, u8.
pub const IFLA_BR_VLAN_STATS_PER_PORT: u16 = 45;

// VLAN link attributes (IFLA_VLAN_*)

/// VLAN identifier, u16.
pub const IFLA_VLAN_ID: u16 = 1;
/// Encapsulation ethertype, u16 in network byte order.
pub const IFLA_VLAN_PROTOCOL: u16 = 5;

// Bond link attributes (IFLA_BOND_*)

/// Bonding mode, u8.
pub const IFLA_BOND_MODE: u16 = 1;
/// MII monitoring interval in milliseconds, u32.
pub const IFLA_BOND_MIIMON: u16 = 3;
/// Up delay in milliseconds, u32.
pub const IFLA_BOND_UPDELAY: u16 = 4;
/// Down delay in milliseconds, u32.
pub const IFLA_BOND_DOWNDELAY: u16 = 5;
/// Carrier-based link detection toggle, u8.
pub const IFLA_BOND_USE_CARRIER: u16 = 6;
/// Transmit hash policy, u8.
pub const IFLA_BOND_XMIT_HASH_POLICY: u16 = 14;
/// LACPDU rate, u8.
pub const IFLA_BOND_AD_LACP_RATE: u16 = 21;

//! Codecs mapping link configuration records to netlink attribute streams.
//!
//! Each kernel link kind managed here (bridge, VLAN, bond) gets one codec:
//! an implementation of [`LinkCodec`] on its record type from
//! `linkcfg-types`, marshaling the record into the kind's `IFLA_*`
//! attribute stream and back. The surrounding system owns the records and
//! the netlink transport; this crate only translates between the two.
//!
//! Decoders are deliberately tolerant: attribute codes they do not
//! recognize are skipped (newer kernels may emit more than we model), and
//! a value that cannot be mapped onto the record leaves the prior field
//! value in place.

mod bond;
mod bridge;
mod vlan;

pub use linkcfg_netlink::{AttrError, AttrResult};

/// Marshaling contract implemented by every link-kind codec.
pub trait LinkCodec {
    /// Serializes the record into a netlink attribute stream.
    ///
    /// Encoding is deterministic: equal records produce byte-identical
    /// streams. Consumers must parse by attribute type, not position.
    fn encode(&self) -> AttrResult<Vec<u8>>;

    /// Updates the record in place from an attribute stream.
    ///
    /// Fields are applied as their attributes are consumed, and there is
    /// no rollback: when decode returns an error the record may hold a
    /// mix of old and new values. Callers that need all-or-nothing
    /// semantics decode into a scratch record and assign it on success.
    fn decode(&mut self, data: &[u8]) -> AttrResult<()>;
}

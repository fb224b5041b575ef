//! Netlink route attribute (TLV) stream encoding and decoding.
//!
//! Route netlink carries link configuration as a flat sequence of
//! type-length-value attributes: a 4-byte header (u16 length including
//! the header, u16 type) followed by the payload, zero-padded so the next
//! attribute starts on a 4-byte boundary. Headers and integer payloads
//! travel in host byte order.
//!
//! [`AttrEncoder`] builds such a stream attribute by attribute and
//! [`AttrDecoder`] walks one. Both defer error reporting: writes and
//! value reads latch the first failure, and the terminal `finish` call
//! returns it. That keeps per-field call sites free of error plumbing in
//! codecs that marshal whole records.

mod decoder;
mod encoder;
mod error;
pub mod rtnl;

pub use decoder::AttrDecoder;
pub use encoder::AttrEncoder;
pub use error::{AttrError, AttrResult};

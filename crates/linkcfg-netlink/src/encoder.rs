//! Attribute stream encoder.

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{AttrError, AttrResult};
use crate::rtnl::{nla_align, NLA_HDRLEN, NLA_TYPE_MASK};

/// Largest payload a u16 length field can describe.
const MAX_PAYLOAD: usize = u16::MAX as usize - NLA_HDRLEN;

/// Serializer for a netlink route attribute stream.
///
/// Write calls append attributes in order and `finish` returns the built
/// stream. A rejected write (reserved or out-of-range attribute code,
/// oversized payload) is latched and every later write becomes a no-op,
/// so callers check a single result at the end instead of one per field.
///
/// Headers and integer payloads are written in host byte order, which is
/// what route netlink expects. Callers needing a network-byte-order
/// payload convert the value before writing it.
#[derive(Debug, Default)]
pub struct AttrEncoder {
    buf: Vec<u8>,
    err: Option<AttrError>,
}

impl AttrEncoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a u8 attribute.
    pub fn put_u8(&mut self, code: u16, value: u8) {
        self.put_bytes(code, &[value]);
    }

    /// Appends a u16 attribute.
    pub fn put_u16(&mut self, code: u16, value: u16) {
        let mut payload = [0u8; 2];
        NativeEndian::write_u16(&mut payload, value);
        self.put_bytes(code, &payload);
    }

    /// Appends a u32 attribute.
    pub fn put_u32(&mut self, code: u16, value: u32) {
        let mut payload = [0u8; 4];
        NativeEndian::write_u32(&mut payload, value);
        self.put_bytes(code, &payload);
    }

    /// Appends an attribute with an arbitrary payload.
    pub fn put_bytes(&mut self, code: u16, payload: &[u8]) {
        if self.err.is_some() {
            return;
        }
        if code == 0 {
            self.err = Some(AttrError::encoding("attribute code 0 is reserved"));
            return;
        }
        if code > NLA_TYPE_MASK {
            self.err = Some(AttrError::encoding(format!(
                "attribute code {} exceeds the 14-bit type space",
                code
            )));
            return;
        }
        if payload.len() > MAX_PAYLOAD {
            self.err = Some(AttrError::encoding(format!(
                "attribute {} payload of {} bytes overflows the u16 length field",
                code,
                payload.len()
            )));
            return;
        }

        let len = NLA_HDRLEN + payload.len();
        let mut header = [0u8; NLA_HDRLEN];
        NativeEndian::write_u16(&mut header[..2], len as u16);
        NativeEndian::write_u16(&mut header[2..], code);

        self.buf.extend_from_slice(&header);
        self.buf.extend_from_slice(payload);
        // Zero-pad so the next attribute starts on a 4-byte boundary.
        self.buf.resize(self.buf.len() + (nla_align(len) - len), 0);
    }

    /// Returns the serialized stream, or the first latched write failure.
    pub fn finish(self) -> AttrResult<Vec<u8>> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.buf),
        }
    }
}

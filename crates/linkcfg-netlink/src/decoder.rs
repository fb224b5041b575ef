//! Attribute stream decoder.

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{AttrError, AttrResult};
use crate::rtnl::{nla_align, NLA_HDRLEN, NLA_TYPE_MASK};

/// Iterator-style reader for a netlink route attribute stream.
///
/// Construction validates the framing of the whole buffer up front, so a
/// truncated header or an attribute that overruns the buffer fails before
/// any value is read. `advance` then steps through the attributes and the
/// width-typed getters read the current value.
///
/// A getter whose width does not match the current payload returns 0 and
/// latches the first such mismatch; iteration keeps going so every
/// attribute in the stream is still visited, and `finish` surfaces the
/// latched error once the loop is done.
#[derive(Debug)]
pub struct AttrDecoder<'a> {
    buf: &'a [u8],
    /// Offset of the next attribute header.
    next: usize,
    /// Type code of the current attribute, flag bits masked off.
    code: u16,
    /// Payload of the current attribute, padding excluded.
    value: &'a [u8],
    err: Option<AttrError>,
}

impl<'a> AttrDecoder<'a> {
    /// Creates a decoder over `buf`, validating its framing.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MalformedStream`] if any attribute header is
    /// truncated or declares a nonzero length that undershoots the header
    /// or overruns the buffer. Padding after the final attribute may be
    /// absent, and a header with length zero marks the start of a pad
    /// tail: the rest of the buffer is skipped, as on an untrimmed
    /// kernel buffer.
    pub fn new(buf: &'a [u8]) -> AttrResult<Self> {
        validate_framing(buf)?;
        Ok(Self {
            buf,
            next: 0,
            code: 0,
            value: &[],
            err: None,
        })
    }

    /// Steps to the next attribute.
    ///
    /// Returns false once the stream is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.next >= self.buf.len() {
            return false;
        }
        // Offsets below were bounds-checked by validate_framing.
        let rest = &self.buf[self.next..];
        let len = NativeEndian::read_u16(&rest[..2]) as usize;
        if len == 0 {
            // Pad tail, nothing left to visit.
            return false;
        }
        self.code = NativeEndian::read_u16(&rest[2..4]) & NLA_TYPE_MASK;
        self.value = &rest[NLA_HDRLEN..len];
        self.next += nla_align(len).min(rest.len());
        true
    }

    /// Type code of the current attribute, without flag bits.
    pub fn kind(&self) -> u16 {
        self.code
    }

    /// Reads the current value as a u8.
    ///
    /// Returns 0 and latches a width error if the payload is not exactly
    /// one byte.
    pub fn get_u8(&mut self) -> u8 {
        if self.value.len() != 1 {
            self.record_width_mismatch(1);
            return 0;
        }
        self.value[0]
    }

    /// Reads the current value as a u16.
    ///
    /// Returns 0 and latches a width error if the payload is not exactly
    /// two bytes.
    pub fn get_u16(&mut self) -> u16 {
        if self.value.len() != 2 {
            self.record_width_mismatch(2);
            return 0;
        }
        NativeEndian::read_u16(self.value)
    }

    /// Reads the current value as a u32.
    ///
    /// Returns 0 and latches a width error if the payload is not exactly
    /// four bytes.
    pub fn get_u32(&mut self) -> u32 {
        if self.value.len() != 4 {
            self.record_width_mismatch(4);
            return 0;
        }
        NativeEndian::read_u32(self.value)
    }

    /// Surfaces the first width error recorded during iteration, if any.
    pub fn finish(self) -> AttrResult<()> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record_width_mismatch(&mut self, want: usize) {
        if self.err.is_none() {
            self.err = Some(AttrError::malformed(format!(
                "attribute {} carries a {}-byte value, want {}",
                self.code,
                self.value.len(),
                want
            )));
        }
    }
}

/// Walks the buffer checking that every attribute header is complete and
/// every declared length stays inside the buffer. A zero-length header
/// ends the walk, leaving the remainder as padding.
fn validate_framing(buf: &[u8]) -> AttrResult<()> {
    let mut offset = 0;
    while offset < buf.len() {
        let rest = &buf[offset..];
        if rest.len() < NLA_HDRLEN {
            return Err(AttrError::malformed(format!(
                "truncated attribute header at offset {}: {} bytes remain",
                offset,
                rest.len()
            )));
        }
        let len = NativeEndian::read_u16(&rest[..2]) as usize;
        if len == 0 {
            // Zero length marks the pad tail the kernel leaves on an
            // untrimmed buffer; everything from here on is padding.
            break;
        }
        if len < NLA_HDRLEN {
            return Err(AttrError::malformed(format!(
                "attribute at offset {} declares length {}, below the 4-byte header",
                offset, len
            )));
        }
        if len > rest.len() {
            return Err(AttrError::malformed(format!(
                "attribute at offset {} declares length {} with {} bytes remaining",
                offset,
                len,
                rest.len()
            )));
        }
        // The final attribute's padding may be absent.
        offset += nla_align(len).min(rest.len());
    }
    Ok(())
}

//! Receive-side request reconstruction and validation.

use crate::error::{DecodeError, WireResult};
use crate::header::{RequestHeader, REQ_HEADER_LEN};
use crate::limits::Limits;
use crate::profile::Profile;
use crate::Id;
use crate::Opcode;

/// A validated request reconstructed from received bytes.
///
/// Borrows the fixed-field and tail regions out of the input buffer;
/// nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    /// Request kind.
    pub opcode: Opcode,
    /// Unaligned total length from the header.
    pub total: u32,
    /// Fixed fields, header excluded.
    pub fixed: &'a [u8],
    /// Variable tail; empty for opcodes without one.
    pub tail: &'a [u8],
}

impl Request<'_> {
    /// Bytes this request occupies on the wire, padding included.
    ///
    /// A stream reader advances by this much to reach the next header.
    #[must_use]
    pub fn aligned_len(&self, profile: Profile) -> usize {
        profile.aligned_len(self.total as usize)
    }
}

/// Reconstructs one request from the front of `buf`.
///
/// Validates the header total against the catalog: opcodes without a tail
/// must match their fixed length exactly, opcodes with one must meet it as
/// a minimum. `buf` may extend past the request (batched streams); only
/// the leading `total` bytes are touched.
///
/// # Errors
///
/// Any [`DecodeError`] from header parsing, catalog disagreement,
/// truncation, or the configured size limit.
pub fn decode_request<'a>(
    buf: &'a [u8],
    profile: Profile,
    limits: &Limits,
) -> WireResult<Request<'a>> {
    let header = RequestHeader::decode(buf)?;
    let total = header.total as usize;

    if total > limits.max_request_bytes {
        return Err(DecodeError::LimitExceeded {
            limit: limits.max_request_bytes,
            actual: total,
        });
    }

    let layout = header.opcode.layout();
    let fixed_len = layout.fixed_len(profile);
    if total < fixed_len {
        return Err(DecodeError::FixedFieldsTruncated {
            opcode: header.opcode as u8,
            total: header.total,
            fixed_len,
        });
    }
    if !layout.has_tail && total != fixed_len {
        return Err(DecodeError::UnexpectedTail {
            opcode: header.opcode as u8,
            total: header.total,
            fixed_len,
        });
    }
    if buf.len() < total {
        return Err(DecodeError::Truncated {
            needed: total,
            available: buf.len(),
        });
    }

    Ok(Request {
        opcode: header.opcode,
        total: header.total,
        fixed: &buf[REQ_HEADER_LEN..fixed_len],
        tail: &buf[fixed_len..total],
    })
}

/// Sequential reader over a request's fixed fields, symmetric to the
/// writer on the send side. Identifier reads honour the profile's width.
#[derive(Debug)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
    profile: Profile,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over a request's fixed-field bytes.
    #[must_use]
    pub const fn new(fixed: &'a [u8], profile: Profile) -> Self {
        Self {
            buf: fixed,
            pos: 0,
            profile,
        }
    }

    fn take(&mut self, width: usize) -> WireResult<&'a [u8]> {
        let end = self.pos + width;
        if end > self.buf.len() {
            return Err(DecodeError::Truncated {
                needed: end,
                available: self.buf.len(),
            });
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Reads one identifier at the profile's width.
    pub fn get_id(&mut self) -> WireResult<Id> {
        let width = self.profile.id_bytes();
        let bytes = self.take(width)?;
        Ok(match width {
            2 => u32::from(u16::from_le_bytes([bytes[0], bytes[1]])),
            _ => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }

    /// Reads one signed 16-bit field.
    pub fn get_i16(&mut self) -> WireResult<i16> {
        let bytes = self.take(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads one unsigned 16-bit field.
    pub fn get_u16(&mut self) -> WireResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads one unsigned 32-bit field.
    pub fn get_u32(&mut self) -> WireResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads one byte.
    pub fn get_u8(&mut self) -> WireResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads `len` raw bytes.
    pub fn get_raw(&mut self, len: usize) -> WireResult<&'a [u8]> {
        self.take(len)
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

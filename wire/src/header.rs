//! The universal request header and its 24-bit length split.

use crate::error::{DecodeError, EncodeError};
use crate::opcode::Opcode;

/// Size in bytes of the header at the start of every request.
///
/// opcode(1) + hilength(1) + length(2), identical under both profiles.
pub const REQ_HEADER_LEN: usize = 4;

/// Largest total length the 24-bit split field can carry.
pub const MAX_WIRE_LEN: u32 = 0x00FF_FFFF;

/// Splits an unaligned total length into the header's hi/lo fields.
///
/// The hi byte carries bits 16..24, the lo word bits 0..16. Requests under
/// 64 KB—the overwhelmingly common case—read back from the lo word alone.
///
/// # Errors
///
/// Returns [`EncodeError::LengthOverflow`] if `total` exceeds 24 bits.
pub fn encode_length(total: usize) -> Result<(u8, u16), EncodeError> {
    if total > MAX_WIRE_LEN as usize {
        return Err(EncodeError::LengthOverflow { length: total });
    }
    #[allow(clippy::cast_possible_truncation)]
    let (hi, lo) = ((total >> 16) as u8, (total & 0xFFFF) as u16);
    Ok((hi, lo))
}

/// Reassembles an unaligned total length from the header's hi/lo fields.
///
/// Total inverse of [`encode_length`]; every byte pair is valid.
#[must_use]
pub const fn decode_length(hi: u8, lo: u16) -> u32 {
    ((hi as u32) << 16) | lo as u32
}

/// The fixed 4-byte header shared by every request.
///
/// `total` is the unaligned byte count of the whole request, header
/// included. Padding out to the profile's alignment boundary is not
/// reflected here; it exists only on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    /// Request kind.
    pub opcode: Opcode,
    /// Unaligned total request length in bytes, header included.
    pub total: u32,
}

impl RequestHeader {
    /// Encodes the header into the first four bytes of `out`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BufferTooSmall`] if `out` is shorter than
    /// [`REQ_HEADER_LEN`], or [`EncodeError::LengthOverflow`] if the total
    /// does not fit the 24-bit split.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, EncodeError> {
        if out.len() < REQ_HEADER_LEN {
            return Err(EncodeError::BufferTooSmall {
                needed: REQ_HEADER_LEN,
                available: out.len(),
            });
        }
        let (hi, lo) = encode_length(self.total as usize)?;
        out[0] = self.opcode as u8;
        out[1] = hi;
        out[2..4].copy_from_slice(&lo.to_le_bytes());
        Ok(REQ_HEADER_LEN)
    }

    /// Decodes a header from the first four bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::RequestTooSmall`] if fewer than four bytes
    /// are available, or [`DecodeError::UnknownOpcode`] for an opcode
    /// outside the catalog.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < REQ_HEADER_LEN {
            return Err(DecodeError::RequestTooSmall {
                actual: buf.len(),
                required: REQ_HEADER_LEN,
            });
        }
        let opcode = Opcode::parse(buf[0])?;
        let hi = buf[1];
        let lo = u16::from_le_bytes([buf[2], buf[3]]);
        Ok(Self {
            opcode,
            total: decode_length(hi, lo),
        })
    }

    /// Length of the variable tail, given the catalog fixed length.
    ///
    /// Defined only for `total >= fixed_len`; a violation means the
    /// request was malformed before it got here.
    #[must_use]
    pub fn var_len(&self, fixed_len: usize) -> u32 {
        debug_assert!(self.total as usize >= fixed_len);
        self.total - fixed_len as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_length_small() {
        assert_eq!(encode_length(12).unwrap(), (0, 12));
    }

    #[test]
    fn encode_length_spans_hi_byte() {
        // 0x012345 -> hi 0x01, lo 0x2345
        assert_eq!(encode_length(0x0001_2345).unwrap(), (0x01, 0x2345));
    }

    #[test]
    fn encode_length_max() {
        assert_eq!(encode_length(0x00FF_FFFF).unwrap(), (0xFF, 0xFFFF));
    }

    #[test]
    fn encode_length_overflow() {
        let err = encode_length(0x0100_0000).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::LengthOverflow {
                length: 0x0100_0000
            }
        ));
    }

    #[test]
    fn decode_length_reassembles() {
        assert_eq!(decode_length(0x01, 0x2345), 0x0001_2345);
        assert_eq!(decode_length(0, 12), 12);
        assert_eq!(decode_length(0xFF, 0xFFFF), MAX_WIRE_LEN);
    }

    #[test]
    fn header_encode_layout() {
        let header = RequestHeader {
            opcode: Opcode::MoveWindow,
            total: 12,
        };
        let mut buf = [0u8; REQ_HEADER_LEN];
        assert_eq!(header.encode(&mut buf).unwrap(), REQ_HEADER_LEN);
        assert_eq!(buf, [14, 0, 12, 0]);
    }

    #[test]
    fn header_roundtrip() {
        let header = RequestHeader {
            opcode: Opcode::Area,
            total: 0x0002_0008,
        };
        let mut buf = [0u8; REQ_HEADER_LEN];
        header.encode(&mut buf).unwrap();
        assert_eq!(RequestHeader::decode(&buf).unwrap(), header);
    }

    #[test]
    fn header_encode_buffer_too_small() {
        let header = RequestHeader {
            opcode: Opcode::Close,
            total: 4,
        };
        let mut buf = [0u8; 3];
        let err = header.encode(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::BufferTooSmall {
                needed: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn header_decode_too_small() {
        let err = RequestHeader::decode(&[1, 0]).unwrap_err();
        assert!(matches!(err, DecodeError::RequestTooSmall { actual: 2, .. }));
    }

    #[test]
    fn header_decode_unknown_opcode() {
        let err = RequestHeader::decode(&[200, 0, 4, 0]).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownOpcode { opcode: 200 }));
    }

    #[test]
    fn var_len_subtracts_fixed() {
        let header = RequestHeader {
            opcode: Opcode::Text,
            total: 31,
        };
        assert_eq!(header.var_len(24), 7);
    }
}

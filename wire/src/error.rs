//! Error types for wire format operations.

use std::fmt;

/// Result type for wire format decode operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors raised while reconstructing a request from received bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Fewer bytes available than the request header needs.
    RequestTooSmall { actual: usize, required: usize },

    /// Opcode outside the catalog.
    UnknownOpcode { opcode: u8 },

    /// Header total is smaller than the opcode's fixed layout.
    FixedFieldsTruncated {
        opcode: u8,
        total: u32,
        fixed_len: usize,
    },

    /// Header total exceeds the fixed layout for an opcode with no tail.
    UnexpectedTail {
        opcode: u8,
        total: u32,
        fixed_len: usize,
    },

    /// Buffer ends before the header total is satisfied.
    Truncated { needed: usize, available: usize },

    /// Header total exceeds the configured maximum request size.
    LimitExceeded { limit: usize, actual: usize },
}

/// Errors raised while encoding header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Total length does not fit the 24-bit split field.
    LengthOverflow { length: usize },

    /// Output buffer shorter than the encoding needs.
    BufferTooSmall { needed: usize, available: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestTooSmall { actual, required } => {
                write!(
                    f,
                    "request too small: {actual} bytes, need at least {required}"
                )
            }
            Self::UnknownOpcode { opcode } => {
                write!(f, "unknown opcode: {opcode}")
            }
            Self::FixedFieldsTruncated {
                opcode,
                total,
                fixed_len,
            } => {
                write!(
                    f,
                    "opcode {opcode}: header total {total} shorter than fixed layout {fixed_len}"
                )
            }
            Self::UnexpectedTail {
                opcode,
                total,
                fixed_len,
            } => {
                write!(
                    f,
                    "opcode {opcode}: header total {total} but fixed layout is exactly {fixed_len}"
                )
            }
            Self::Truncated { needed, available } => {
                write!(f, "truncated request: need {needed} bytes, have {available}")
            }
            Self::LimitExceeded { limit, actual } => {
                write!(f, "request size limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOverflow { length } => {
                write!(f, "length overflow: {length} exceeds the 24-bit wire field")
            }
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed}, have {available}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_unknown_opcode() {
        let err = DecodeError::UnknownOpcode { opcode: 200 };
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn decode_error_display_truncated() {
        let err = DecodeError::Truncated {
            needed: 16,
            available: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn decode_error_display_limit() {
        let err = DecodeError::LimitExceeded {
            limit: 512,
            actual: 600,
        };
        let msg = err.to_string();
        assert!(msg.contains("512"));
        assert!(msg.contains("600"));
    }

    #[test]
    fn encode_error_display_overflow() {
        let err = EncodeError::LengthOverflow {
            length: 0x0100_0000,
        };
        assert!(err.to_string().contains("24-bit"));
    }
}

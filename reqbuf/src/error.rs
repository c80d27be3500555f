//! Error types for request queue operations.

use std::fmt;

/// Result type for request queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors raised while allocating into the request queue.
///
/// All are synchronous and leave the queue unmodified; nothing is retried
/// internally. Transport write failures surface separately as
/// `std::io::Error` from `flush`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueueError {
    /// Requested total exceeds the configured maximum request size.
    RequestTooLarge { requested: usize, max: usize },

    /// Requested total exceeds the 24-bit wire length field. Unreachable
    /// while the maximum request size stays below that ceiling, but
    /// checked all the same.
    LengthOverflow { length: usize },

    /// Growth needed on a caller-assigned buffer, which the queue must
    /// never resize or relocate.
    BufferNotOwned { needed: usize, capacity: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestTooLarge { requested, max } => {
                write!(f, "request too large: {requested} bytes, maximum {max}")
            }
            Self::LengthOverflow { length } => {
                write!(f, "length overflow: {length} exceeds the 24-bit wire field")
            }
            Self::BufferNotOwned { needed, capacity } => {
                write!(
                    f,
                    "assigned buffer cannot grow: need {needed} bytes, have {capacity}"
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_request_too_large() {
        let err = QueueError::RequestTooLarge {
            requested: 5000,
            max: 4096,
        };
        let msg = err.to_string();
        assert!(msg.contains("5000"));
        assert!(msg.contains("4096"));
    }

    #[test]
    fn display_buffer_not_owned() {
        let err = QueueError::BufferNotOwned {
            needed: 128,
            capacity: 64,
        };
        assert!(err.to_string().contains("assigned buffer"));
    }
}

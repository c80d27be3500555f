//! Deployment-time size limits.

/// Size limits fixed at build/connection time.
///
/// The wire format itself allows requests up to 2^24 bytes; the limits
/// here cap what a client will actually construct, since the server reads
/// each request into a bounded buffer. `max_request_bytes` must be a
/// multiple of the profile's alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest unaligned request the client will build.
    pub max_request_bytes: usize,

    /// Initial capacity of the client's request buffer. The buffer grows
    /// on demand and never shrinks.
    pub initial_buffer_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}

impl Limits {
    /// Limits paired with [`Profile::STANDARD`](crate::Profile::STANDARD).
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            max_request_bytes: 2_572_864,
            initial_buffer_bytes: 2048,
        }
    }

    /// Limits paired with [`Profile::COMPACT`](crate::Profile::COMPACT),
    /// for targets where the server stages requests in a small stack
    /// buffer.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            max_request_bytes: 512,
            initial_buffer_bytes: 512,
        }
    }

    /// Small limits for exercising growth and rejection paths in tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_request_bytes: 4096,
            initial_buffer_bytes: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(Limits::default(), Limits::standard());
    }

    #[test]
    fn standard_values() {
        let limits = Limits::standard();
        assert_eq!(limits.max_request_bytes, 2_572_864);
        assert_eq!(limits.initial_buffer_bytes, 2048);
    }

    #[test]
    fn compact_values() {
        let limits = Limits::compact();
        assert_eq!(limits.max_request_bytes, 512);
        assert_eq!(limits.initial_buffer_bytes, 512);
    }

    #[test]
    fn max_request_is_aligned() {
        // The server-side read loop depends on this staying aligned
        assert_eq!(Limits::standard().max_request_bytes % 4, 0);
        assert_eq!(Limits::compact().max_request_bytes % 2, 0);
        assert_eq!(Limits::for_testing().max_request_bytes % 4, 0);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let standard = Limits::standard();
        assert!(test_limits.max_request_bytes < standard.max_request_bytes);
        assert!(test_limits.initial_buffer_bytes < standard.initial_buffer_bytes);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.initial_buffer_bytes, 64);
    }
}

//! Build-time profile: identifier width and request alignment.

/// Width of every resource-identifier field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdWidth {
    /// 16-bit identifiers (constrained targets).
    Two,
    /// 32-bit identifiers.
    Four,
}

impl IdWidth {
    /// Returns the identifier width in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

/// The paired identifier-width and alignment choice shared by both peers.
///
/// Both sides of a connection must be built for the same profile; nothing
/// on the wire identifies which one is in use. `align` is always a power
/// of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    /// Width of all identifier fields.
    pub id_width: IdWidth,
    /// Byte boundary every request is padded to on the wire.
    pub align: usize,
}

impl Profile {
    /// Standard profile: 32-bit identifiers, 4-byte alignment.
    pub const STANDARD: Self = Self {
        id_width: IdWidth::Four,
        align: 4,
    };

    /// Compact profile for constrained targets: 16-bit identifiers,
    /// 2-byte alignment.
    pub const COMPACT: Self = Self {
        id_width: IdWidth::Two,
        align: 2,
    };

    /// Returns the identifier width in bytes.
    #[must_use]
    pub const fn id_bytes(self) -> usize {
        self.id_width.bytes()
    }

    /// Rounds `total` up to the next multiple of the alignment boundary.
    ///
    /// Idempotent: an already-aligned length is returned unchanged. The
    /// pad bytes exist only on the wire and carry no content.
    #[must_use]
    pub const fn aligned_len(self, total: usize) -> usize {
        (total + self.align - 1) & !(self.align - 1)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::STANDARD
    }
}

//! In-place field writer for one allocated request.

use wire::{Id, IdWidth, Profile};

/// Write access to one freshly allocated request's body.
///
/// Fields are written sequentially in catalog order, starting right after
/// the header; tail bytes follow the fixed fields through the same
/// cursor. The body is zero-filled at allocation, so pad fields can be
/// skipped rather than written. Writing past the allocated body is an
/// internal bug and panics.
#[derive(Debug)]
pub struct RequestWriter<'a> {
    body: &'a mut [u8],
    pos: usize,
    profile: Profile,
}

impl<'a> RequestWriter<'a> {
    pub(crate) fn new(body: &'a mut [u8], profile: Profile) -> Self {
        Self {
            body,
            pos: 0,
            profile,
        }
    }

    /// Writes one identifier at the profile's width.
    ///
    /// Under the compact profile the identifier must fit 16 bits; callers
    /// hand out ids, so an overflow is a caller bug.
    pub fn put_id(&mut self, id: Id) {
        match self.profile.id_width {
            IdWidth::Two => {
                debug_assert!(id <= u32::from(u16::MAX), "id {id:#x} exceeds 16 bits");
                #[allow(clippy::cast_possible_truncation)]
                self.put_bytes(&(id as u16).to_le_bytes());
            }
            IdWidth::Four => self.put_bytes(&id.to_le_bytes()),
        }
    }

    /// Writes one signed 16-bit field.
    pub fn put_i16(&mut self, value: i16) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Writes one unsigned 16-bit field.
    pub fn put_u16(&mut self, value: u16) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Writes one signed 32-bit field.
    pub fn put_i32(&mut self, value: i32) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Writes one unsigned 32-bit field.
    pub fn put_u32(&mut self, value: u32) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Writes one byte.
    pub fn put_u8(&mut self, value: u8) {
        self.put_bytes(&[value]);
    }

    /// Writes raw bytes: embedded blobs and variable tails.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.body[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Skips `len` bytes, leaving them zero. Used for pad fields and the
    /// unoccupied remainder of fixed-size union regions.
    pub fn skip(&mut self, len: usize) {
        debug_assert!(self.pos + len <= self.body.len());
        self.pos += len;
    }

    /// Advances to an absolute body offset, which must not be behind the
    /// cursor. Skipped bytes stay zero.
    pub fn skip_to(&mut self, offset: usize) {
        debug_assert!(offset >= self.pos && offset <= self.body.len());
        self.pos = offset;
    }

    /// Bytes left in the body.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.body.len() - self.pos
    }
}

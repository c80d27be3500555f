//! The per-connection request queue.

use std::io;

use wire::{encode_length, Limits, Opcode, Profile, REQ_HEADER_LEN};

use crate::error::{QueueError, QueueResult};
use crate::transport::Transport;
use crate::writer::RequestWriter;

/// Backing storage for a queue.
///
/// Owned storage grows on demand and never shrinks. Assigned storage was
/// handed in by the caller (typically a shared memory segment read
/// directly by a privileged peer) and must never be resized or relocated.
#[derive(Debug)]
enum Storage {
    Owned(Vec<u8>),
    Assigned(Box<[u8]>),
}

impl Storage {
    fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(buf) => buf,
            Self::Assigned(buf) => buf,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Owned(buf) => buf,
            Self::Assigned(buf) => buf,
        }
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// One connection's request assembly buffer.
///
/// Requests accumulate between flushes and are transmitted back-to-back
/// in allocation order — ordering is load-bearing, since e.g. a destroy
/// must not overtake the create it refers to. The queue is not internally
/// synchronized; all calls against one queue must come from a single
/// logical thread of control.
#[derive(Debug)]
pub struct RequestQueue {
    storage: Storage,
    cursor: usize,
    profile: Profile,
    limits: Limits,
}

impl RequestQueue {
    /// Creates a queue with owned storage at the configured initial
    /// capacity.
    #[must_use]
    pub fn new(profile: Profile, limits: Limits) -> Self {
        let initial = limits.initial_buffer_bytes;
        Self {
            storage: Storage::Owned(vec![0; initial]),
            cursor: 0,
            profile,
            limits,
        }
    }

    /// Allocates one request in place and returns a writer over its body.
    ///
    /// The fixed size comes from the opcode's catalog entry; `extra` is
    /// the variable tail length and must be zero for opcodes without one.
    /// The header is written immediately, the body and pad bytes are
    /// zeroed, and the cursor advances by the aligned length. On error
    /// the queue is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`QueueError::RequestTooLarge`] when the total exceeds the
    /// configured maximum, [`QueueError::LengthOverflow`] past the 24-bit
    /// wire field, [`QueueError::BufferNotOwned`] when growth is needed
    /// on assigned storage.
    pub fn allocate(&mut self, opcode: Opcode, extra: usize) -> QueueResult<RequestWriter<'_>> {
        let layout = opcode.layout();
        debug_assert!(
            extra == 0 || layout.has_tail,
            "{opcode:?} does not take a variable tail"
        );

        let fixed_len = layout.fixed_len(self.profile);
        let total = fixed_len + extra;
        if total > self.limits.max_request_bytes {
            return Err(QueueError::RequestTooLarge {
                requested: total,
                max: self.limits.max_request_bytes,
            });
        }
        let (hi, lo) =
            encode_length(total).map_err(|_| QueueError::LengthOverflow { length: total })?;

        let aligned = self.profile.aligned_len(total);
        let end = self.cursor + aligned;
        if end > self.storage.len() {
            self.grow(end)?;
        }

        let start = self.cursor;
        self.cursor = end;

        let buf = self.storage.as_mut_slice();
        buf[start] = opcode as u8;
        buf[start + 1] = hi;
        buf[start + 2..start + 4].copy_from_slice(&lo.to_le_bytes());
        // Storage is reused across flushes; clear stale bytes so pad
        // fields and wire padding are deterministic.
        buf[start + REQ_HEADER_LEN..end].fill(0);

        Ok(RequestWriter::new(
            &mut buf[start + REQ_HEADER_LEN..start + total],
            self.profile,
        ))
    }

    fn grow(&mut self, needed: usize) -> QueueResult<()> {
        match &mut self.storage {
            Storage::Owned(buf) => {
                // Grow to the largest size asked for and keep it; the
                // memory-for-reallocation trade matches the original
                // client behavior.
                let new_len = needed.max(buf.len() * 2);
                buf.resize(new_len, 0);
                Ok(())
            }
            Storage::Assigned(buf) => Err(QueueError::BufferNotOwned {
                needed,
                capacity: buf.len(),
            }),
        }
    }

    /// Hands everything accumulated since the last flush to the transport
    /// and resets to empty. Capacity is retained for reuse.
    ///
    /// `reply_needed` is forwarded to the transport: it signals that the
    /// caller will block awaiting a server reply next. The queue itself
    /// never reads replies. May block for the duration of the transport
    /// write.
    ///
    /// # Errors
    ///
    /// Propagates the transport write failure unchanged.
    pub fn flush<T: Transport>(&mut self, transport: &mut T, reply_needed: bool) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        transport.send(&self.storage.as_slice()[..self.cursor], reply_needed)?;
        self.cursor = 0;
        Ok(())
    }

    /// Replaces the queue's storage with a caller-owned region and resets
    /// the cursor.
    ///
    /// Used when requests are written straight into a shared memory
    /// segment. The queue will never resize or relocate assigned storage;
    /// an allocation that does not fit fails with
    /// [`QueueError::BufferNotOwned`].
    pub fn assign_buffer(&mut self, storage: Box<[u8]>) {
        self.storage = Storage::Assigned(storage);
        self.cursor = 0;
    }

    /// Bytes accumulated since the last flush, in allocation order.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.storage.as_slice()[..self.cursor]
    }

    /// Number of pending bytes.
    #[must_use]
    pub const fn pending_len(&self) -> usize {
        self.cursor
    }

    /// `true` when nothing is waiting to be flushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Current storage capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The profile this queue frames requests for.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// The configured limits.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }
}

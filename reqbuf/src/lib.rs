//! Client-side request buffering for the nanowire GUI protocol.
//!
//! One [`RequestQueue`] per connection assembles framed requests into a
//! single growable byte region and hands them to the transport in batches.
//! Allocation is in-place: callers receive a writer over the request's
//! body and fill fields directly, with no per-request heap traffic.
//!
//! # Design Principles
//!
//! - **Batching by default** - Requests accumulate until an explicit
//!   flush; submission order is preserved exactly.
//! - **All-or-nothing allocation** - An allocation that cannot be framed
//!   leaves the queue untouched.
//! - **Single-threaded per queue** - No internal locking; a queue belongs
//!   to one logical thread of control.

mod error;
mod queue;
mod transport;
mod writer;

pub use error::{QueueError, QueueResult};
pub use queue::RequestQueue;
pub use transport::{StreamTransport, Transport};
pub use writer::RequestWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{Limits, Profile};

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let queue = RequestQueue::new(Profile::STANDARD, Limits::for_testing());
        let _ = queue.capacity();
        let _: QueueResult<()> = Ok(());
        let _ = StreamTransport::new(Vec::<u8>::new());
    }
}

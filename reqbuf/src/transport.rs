//! The injected transport write primitive.

use std::io::{self, Write};

/// Where flushed request batches go.
///
/// `send` must deliver the whole batch or fail; it may block for the
/// duration of the write. `reply_needed` signals that the caller will
/// block awaiting a server reply once the batch is on the wire — a hint
/// only, useful for transports that coalesce or delay writes.
pub trait Transport {
    /// Writes one flushed batch, blocking until complete.
    ///
    /// # Errors
    ///
    /// Propagates the underlying write failure; the queue does not
    /// interpret or retry it.
    fn send(&mut self, bytes: &[u8], reply_needed: bool) -> io::Result<()>;
}

/// Adapter over any blocking byte stream (socket, pipe, `Vec<u8>` in
/// tests). Drops the reply hint; stream writes are unconditional.
#[derive(Debug)]
pub struct StreamTransport<W> {
    inner: W,
}

impl<W> StreamTransport<W> {
    /// Wraps a byte stream.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped stream.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Borrows the wrapped stream.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Transport for StreamTransport<W> {
    fn send(&mut self, bytes: &[u8], _reply_needed: bool) -> io::Result<()> {
        self.inner.write_all(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_transport_writes_all_bytes() {
        let mut transport = StreamTransport::new(Vec::new());
        transport.send(&[1, 2, 3], false).unwrap();
        transport.send(&[4], true).unwrap();
        assert_eq!(transport.into_inner(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn stream_transport_propagates_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut transport = StreamTransport::new(Broken);
        assert!(transport.send(&[0], false).is_err());
    }
}

//! Introspection and debugging tools for nanowire request streams.
//!
//! This crate walks captured request bytes the way a server would —
//! decode the leading request, advance by its aligned length, repeat —
//! and reports what it finds:
//!
//! - Per-request opcode, unaligned/aligned lengths, tail size
//! - Stream totals: request count, bytes, padding overhead
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what is on the wire.

use std::fmt::Write as _;

use wire::{decode_request, DecodeError, Limits, Opcode, Profile};

/// One decoded request in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSummary {
    /// Byte offset of the request header in the stream.
    pub offset: usize,
    pub opcode: Opcode,
    /// Unaligned total from the header.
    pub total: u32,
    /// Bytes occupied on the wire, padding included.
    pub aligned: usize,
    /// Variable tail length, 0 for fixed-size requests.
    pub tail_len: usize,
}

/// Everything learned from walking one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    pub requests: Vec<RequestSummary>,
    pub total_bytes: usize,
    /// Alignment padding across the whole stream.
    pub padding_bytes: usize,
}

/// Walks a request stream front to back.
///
/// Stops at the first undecodable request; captured streams from a
/// healthy client decode to the last byte, so an error usually means
/// the wrong profile was selected.
///
/// # Errors
///
/// The [`DecodeError`] of the offending request.
pub fn summarize_stream(
    bytes: &[u8],
    profile: Profile,
    limits: &Limits,
) -> Result<StreamSummary, DecodeError> {
    let mut requests = Vec::new();
    let mut padding_bytes = 0;
    let mut offset = 0;
    while offset < bytes.len() {
        let request = decode_request(&bytes[offset..], profile, limits)?;
        let aligned = request.aligned_len(profile);
        padding_bytes += aligned - request.total as usize;
        requests.push(RequestSummary {
            offset,
            opcode: request.opcode,
            total: request.total,
            aligned,
            tail_len: request.tail.len(),
        });
        offset += aligned;
    }
    Ok(StreamSummary {
        requests,
        total_bytes: bytes.len(),
        padding_bytes,
    })
}

/// Renders a summary as the `inspect` command prints it.
#[must_use]
pub fn format_summary(summary: &StreamSummary, limit: Option<usize>) -> String {
    let mut out = String::new();
    let shown = limit.unwrap_or(summary.requests.len());
    for request in summary.requests.iter().take(shown) {
        let tail = if request.tail_len > 0 {
            format!(" tail {} bytes", request.tail_len)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:#08x}  {:<24} total {:>5} aligned {:>5}{tail}",
            request.offset,
            format!("{:?}", request.opcode),
            request.total,
            request.aligned,
        );
    }
    if shown < summary.requests.len() {
        let _ = writeln!(out, "... {} more", summary.requests.len() - shown);
    }
    let _ = writeln!(
        out,
        "{} requests, {} bytes ({} padding)",
        summary.requests.len(),
        summary.total_bytes,
        summary.padding_bytes
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqbuf::RequestQueue;
    use requests::{connection, draw, gc, window};

    fn sample_stream() -> Vec<u8> {
        let mut queue = RequestQueue::new(Profile::STANDARD, Limits::for_testing());
        connection::open(&mut queue, 1).unwrap();
        window::new_window(&mut queue, 1, 0, 0, 320, 240, 0, 0, 0).unwrap();
        gc::new_gc(&mut queue).unwrap();
        draw::text(&mut queue, 2, 3, 4, 5, 0, b"abc").unwrap();
        queue.pending().to_vec()
    }

    #[test]
    fn summarize_walks_whole_stream() {
        let bytes = sample_stream();
        let summary =
            summarize_stream(&bytes, Profile::STANDARD, &Limits::for_testing()).unwrap();
        assert_eq!(summary.requests.len(), 4);
        assert_eq!(summary.total_bytes, bytes.len());
        assert_eq!(summary.requests[0].opcode, Opcode::Open);
        assert_eq!(summary.requests[3].opcode, Opcode::Text);
        assert_eq!(summary.requests[3].tail_len, 3);
        // NewWindow pads 26 to 28; Text pads 27 to 28
        assert_eq!(summary.padding_bytes, 3);
    }

    #[test]
    fn offsets_are_aligned_starts() {
        let bytes = sample_stream();
        let summary =
            summarize_stream(&bytes, Profile::STANDARD, &Limits::for_testing()).unwrap();
        let mut expected = 0;
        for request in &summary.requests {
            assert_eq!(request.offset, expected);
            expected += request.aligned;
        }
        assert_eq!(expected, summary.total_bytes);
    }

    #[test]
    fn wrong_profile_fails_to_decode() {
        let bytes = sample_stream();
        assert!(summarize_stream(&bytes, Profile::COMPACT, &Limits::compact()).is_err());
    }

    #[test]
    fn format_limits_output() {
        let bytes = sample_stream();
        let summary =
            summarize_stream(&bytes, Profile::STANDARD, &Limits::for_testing()).unwrap();
        let text = format_summary(&summary, Some(2));
        assert!(text.contains("Open"));
        assert!(text.contains("... 2 more"));
        assert!(text.contains("4 requests"));
    }
}

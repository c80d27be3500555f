//! Connection lifecycle.

use reqbuf::{QueueResult, RequestQueue};
use wire::Opcode;

/// Announces the client to the server. `pid` identifies the client
/// process for server-side diagnostics.
pub fn open(queue: &mut RequestQueue, pid: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Open, 0)?;
    req.put_u32(pid);
    Ok(())
}

/// Ends the session; the server reclaims every resource the client owns.
pub fn close(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::Close, 0)?;
    Ok(())
}

pub fn get_screen_info(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetScreenInfo, 0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{Limits, Profile};

    fn queue() -> RequestQueue {
        RequestQueue::new(Profile::STANDARD, Limits::for_testing())
    }

    #[test]
    fn open_frames_pid() {
        let mut q = queue();
        open(&mut q, 0x1234).unwrap();
        assert_eq!(q.pending(), &[0, 0, 8, 0, 0x34, 0x12, 0, 0]);
    }

    #[test]
    fn close_is_header_only() {
        let mut q = queue();
        close(&mut q).unwrap();
        assert_eq!(q.pending(), &[1, 0, 4, 0]);
    }
}

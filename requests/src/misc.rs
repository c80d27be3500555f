//! Screen, palette, timer, and shared-memory requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode, PALETTE_WIRE_LEN};

use crate::{count_i16, PalEntry};

/// Entries in the system palette region.
const PALETTE_ENTRIES: usize = PALETTE_WIRE_LEN / 3;

pub fn get_system_palette(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetSystemPalette, 0)?;
    Ok(())
}

/// Replaces system palette entries starting at `first`. The request
/// always carries the full fixed-size palette region; slots past the
/// supplied entries stay zero.
pub fn set_system_palette(
    queue: &mut RequestQueue,
    first: i16,
    entries: &[PalEntry],
) -> QueueResult<()> {
    debug_assert!(entries.len() <= PALETTE_ENTRIES);
    let mut req = queue.allocate(Opcode::SetSystemPalette, 0)?;
    req.put_i16(first);
    req.put_i16(count_i16(entries.len()));
    for entry in entries {
        req.put_u8(entry.r);
        req.put_u8(entry.g);
        req.put_u8(entry.b);
    }
    Ok(())
}

/// Asks for the closest available pixel value to a color; the answer
/// arrives in the reply.
pub fn find_color(queue: &mut RequestQueue, color: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::FindColor, 0)?;
    req.put_u32(color);
    Ok(())
}

/// Looks up a desktop scheme color by index.
pub fn get_sys_color(queue: &mut RequestQueue, index: u16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetSysColor, 0)?;
    req.put_u16(index);
    Ok(())
}

/// Sets the screen saver delay in seconds, 0 to disable.
pub fn set_screen_saver_timeout(queue: &mut RequestQueue, timeout: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetScreenSaverTimeout, 0)?;
    req.put_u32(timeout);
    Ok(())
}

pub fn set_portrait_mode(queue: &mut RequestQueue, mode: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetPortraitMode, 0)?;
    req.put_u32(mode);
    Ok(())
}

/// Installs a coordinate transform for raw touch input. `coefficients`
/// are the six affine terms plus the divisor, in calibration units.
pub fn set_transform(
    queue: &mut RequestQueue,
    mode: u32,
    coefficients: &[u32; 7],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetTransform, 0)?;
    req.put_u32(mode);
    for &value in coefficients {
        req.put_u32(value);
    }
    Ok(())
}

pub fn bell(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::Bell, 0)?;
    Ok(())
}

/// Asks the server to set up a shared-memory command area of at least
/// `size` bytes; the offset arrives in the reply.
pub fn req_shm_cmds(queue: &mut RequestQueue, size: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ReqShmCmds, 0)?;
    req.put_u32(size);
    Ok(())
}

/// Tells the server to process `size` bytes of commands written to the
/// shared area. Sent through the regular stream so it orders correctly
/// against non-shared requests.
pub fn shm_cmds_flush(queue: &mut RequestQueue, size: u32, reply: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ShmCmdsFlush, 0)?;
    req.put_u32(size);
    req.put_u32(reply);
    Ok(())
}

/// Starts a periodic timer delivering timer events to `window`.
pub fn create_timer(queue: &mut RequestQueue, window: Id, period_ms: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CreateTimer, 0)?;
    req.put_id(window);
    req.put_u32(period_ms);
    Ok(())
}

pub fn destroy_timer(queue: &mut RequestQueue, timer: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyTimer, 0)?;
    req.put_id(timer);
    Ok(())
}

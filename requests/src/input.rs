//! Event selection and input injection.

use reqbuf::{QueueResult, RequestQueue};
use wire::{event_payload_len, Id, Opcode};

use crate::InjectedEvent;

/// Chooses which event kinds the server delivers for `window`.
pub fn select_events(queue: &mut RequestQueue, window: Id, mask: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SelectEvents, 0)?;
    req.put_id(window);
    req.put_u32(mask);
    Ok(())
}

/// Asks for the next event, blocking server-side until one arrives.
pub fn get_next_event(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetNextEvent, 0)?;
    Ok(())
}

/// Like `get_next_event` but replies immediately with a no-event
/// marker when the queue is empty.
pub fn check_next_event(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::CheckNextEvent, 0)?;
    Ok(())
}

/// Returns the next event without removing it from the server queue.
pub fn peek_event(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::PeekEvent, 0)?;
    Ok(())
}

/// Injects a synthetic input event, bypassing the real drivers. Both
/// arms occupy the same fixed payload region; the discriminator is
/// written after it, and the unused remainder stays zero.
pub fn inject_event(queue: &mut RequestQueue, event: &InjectedEvent) -> QueueResult<()> {
    let payload_len = event_payload_len(queue.profile());
    let mut req = queue.allocate(Opcode::InjectEvent, 0)?;
    match *event {
        InjectedEvent::Pointer {
            x,
            y,
            buttons,
            visible,
        } => {
            req.put_i16(x);
            req.put_i16(y);
            req.put_u16(buttons);
            req.put_u8(u8::from(visible));
        }
        InjectedEvent::Keyboard {
            window,
            key,
            modifiers,
            scancode,
            pressed,
        } => {
            req.put_id(window);
            req.put_u16(key);
            req.put_u16(modifiers);
            req.put_u8(scancode);
            req.put_u8(u8::from(pressed));
        }
    }
    req.skip_to(payload_len);
    req.put_u16(event.event_type());
    Ok(())
}

/// Reserves (or releases, per `grab_type`) a key for exclusive
/// delivery to `window`.
pub fn grab_key(queue: &mut RequestQueue, window: Id, key: i16, grab_type: u16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GrabKey, 0)?;
    req.put_id(window);
    req.put_i16(key);
    req.put_u16(grab_type);
    Ok(())
}

pub fn query_pointer(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::QueryPointer, 0)?;
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
    fn inject_pointer_event_fills_payload_prefix() {
        let mut q = queue();
        inject_event(
            &mut q,
            &InjectedEvent::Pointer {
                x: 100,
                y: -2,
                buttons: 0b101,
                visible: true,
            },
        )
        .unwrap();
        let bytes = q.pending();
        // header + 10-byte payload + event type = 16
        assert_eq!(&bytes[0..4], &[60, 0, 16, 0]);
        assert_eq!(&bytes[4..6], &100i16.to_le_bytes());
        assert_eq!(&bytes[6..8], &(-2i16).to_le_bytes());
        assert_eq!(&bytes[8..10], &0b101u16.to_le_bytes());
        assert_eq!(bytes[10], 1);
        // Unused remainder of the shared region stays zero
        assert_eq!(&bytes[11..14], &[0, 0, 0]);
        assert_eq!(&bytes[14..16], &0u16.to_le_bytes());
    }

    #[test]
    fn inject_keyboard_event_uses_full_region() {
        let mut q = queue();
        inject_event(
            &mut q,
            &InjectedEvent::Keyboard {
                window: 0x20,
                key: b'q'.into(),
                modifiers: 0,
                scancode: 16,
                pressed: false,
            },
        )
        .unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[4..8], &0x20u32.to_le_bytes());
        assert_eq!(&bytes[8..10], &u16::from(b'q').to_le_bytes());
        assert_eq!(bytes[12], 16);
        assert_eq!(bytes[13], 0);
        assert_eq!(&bytes[14..16], &1u16.to_le_bytes());
    }

    #[test]
    fn compact_profile_shrinks_the_payload_region() {
        let mut q = RequestQueue::new(Profile::COMPACT, Limits::compact());
        inject_event(
            &mut q,
            &InjectedEvent::Keyboard {
                window: 3,
                key: 13,
                modifiers: 0,
                scancode: 28,
                pressed: true,
            },
        )
        .unwrap();
        let bytes = q.pending();
        // header + 8-byte payload + event type = 14
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 14);
        assert_eq!(&bytes[4..6], &3u16.to_le_bytes());
        assert_eq!(&bytes[12..14], &1u16.to_le_bytes());
    }
}

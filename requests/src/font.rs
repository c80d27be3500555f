//! Font loading and attribute requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode, FONT_FORMAT_LEN};

use crate::LogFont;

pub fn get_font_info(queue: &mut RequestQueue, font: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetFontInfo, 0)?;
    req.put_id(font);
    Ok(())
}

pub fn set_font_size_ex(
    queue: &mut RequestQueue,
    font: Id,
    height: i16,
    width: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetFontSizeEx, 0)?;
    req.put_id(font);
    req.put_i16(height);
    req.put_i16(width);
    Ok(())
}

/// Rotates the font baseline; `tenth_degrees` is counter-clockwise in
/// tenths of a degree.
pub fn set_font_rotation(
    queue: &mut RequestQueue,
    font: Id,
    tenth_degrees: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetFontRotation, 0)?;
    req.put_id(font);
    req.put_i16(tenth_degrees);
    Ok(())
}

/// Sets and clears rendering attribute bits (kerning, antialiasing) in
/// one request.
pub fn set_font_attr(
    queue: &mut RequestQueue,
    font: Id,
    set_flags: i16,
    clear_flags: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetFontAttr, 0)?;
    req.put_id(font);
    req.put_i16(set_flags);
    req.put_i16(clear_flags);
    Ok(())
}

/// Loads a font by name at the requested size; the NUL-terminated name
/// travels in the tail. The font id arrives in the reply.
pub fn create_font_ex(
    queue: &mut RequestQueue,
    height: i16,
    width: i16,
    name: &str,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CreateFontEx, name.len() + 1)?;
    req.put_i16(height);
    req.put_i16(width);
    req.put_bytes(name.as_bytes());
    req.put_u8(0);
    Ok(())
}

/// Selects a font by logical description rather than file name.
pub fn create_log_font(queue: &mut RequestQueue, font: &LogFont) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CreateLogFont, 0)?;
    req.put_bytes(&font.encode());
    Ok(())
}

/// Instantiates a font from a previously sent image buffer. `format`
/// is the NUL-padded loader tag (`"TTF"`, `"PCF"`, ...).
pub fn create_font_from_buffer(
    queue: &mut RequestQueue,
    buffer: u32,
    format: &[u8; FONT_FORMAT_LEN],
    height: i16,
    width: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CreateFontFromBuffer, 0)?;
    req.put_u32(buffer);
    req.put_bytes(format);
    req.put_i16(height);
    req.put_i16(width);
    Ok(())
}

pub fn destroy_font(queue: &mut RequestQueue, font: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyFont, 0)?;
    req.put_id(font);
    Ok(())
}

/// Duplicates a font at a new size.
pub fn copy_font(queue: &mut RequestQueue, font: Id, height: i16, width: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CopyFont, 0)?;
    req.put_id(font);
    req.put_i16(height);
    req.put_i16(width);
    Ok(())
}

pub fn get_font_list(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetFontList, 0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{Limits, Profile, LOGFONT_WIRE_LEN};

    fn queue() -> RequestQueue {
        RequestQueue::new(Profile::STANDARD, Limits::for_testing())
    }

    #[test]
    fn create_font_ex_appends_nul_terminated_name() {
        let mut q = queue();
        create_font_ex(&mut q, 16, 0, "helv").unwrap();
        let bytes = q.pending();
        // fixed 8 + "helv\0" = 13, padded to 16
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 13);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..13], b"helv\0");
    }

    #[test]
    fn create_log_font_embeds_whole_record() {
        let mut q = queue();
        create_log_font(&mut q, &LogFont::with_face_name("courier")).unwrap();
        let bytes = q.pending();
        assert_eq!(
            usize::from(u16::from_le_bytes([bytes[2], bytes[3]])),
            4 + LOGFONT_WIRE_LEN
        );
        assert_eq!(&bytes[22..29], b"courier");
    }

    #[test]
    fn create_font_from_buffer_pads_format_tag() {
        let mut q = queue();
        let mut format = [0u8; FONT_FORMAT_LEN];
        format[..3].copy_from_slice(b"TTF");
        create_font_from_buffer(&mut q, 7, &format, 12, 0).unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[4..8], &7u32.to_le_bytes());
        assert_eq!(&bytes[8..11], b"TTF");
        assert_eq!(bytes[11], 0);
        assert_eq!(&bytes[24..26], &12i16.to_le_bytes());
    }
}

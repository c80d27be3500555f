//! Value types carried inside requests.

use wire::{Id, LOGFONT_WIRE_LEN};

/// A rectangle in signed 16-bit window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i16, y: i16, width: i16, height: i16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One system palette entry, three bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PalEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PalEntry {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A logical font description, sent as a fixed record in
/// `create_log_font`. The server matches it against installed fonts;
/// zeroed fields mean "don't care".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFont {
    /// Requested height in pixels, 0 for any.
    pub height: i16,
    /// Requested average width in pixels, 0 for any.
    pub width: i16,
    /// Baseline escapement in tenths of a degree.
    pub escapement: i16,
    /// Glyph orientation in tenths of a degree.
    pub orientation: i16,
    /// Stroke weight, 100 (thin) to 900 (black).
    pub weight: i16,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    pub charset: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    /// NUL-padded face name.
    pub face_name: [u8; Self::FACE_NAME_LEN],
}

impl LogFont {
    /// Bytes reserved for the face name inside the wire record.
    pub const FACE_NAME_LEN: usize = 64;

    /// A zeroed record matching any font with the given face name.
    /// Names longer than the reserved field are truncated.
    #[must_use]
    pub fn with_face_name(name: &str) -> Self {
        let mut font = Self::default();
        let bytes = name.as_bytes();
        let len = bytes.len().min(Self::FACE_NAME_LEN - 1);
        font.face_name[..len].copy_from_slice(&bytes[..len]);
        font
    }

    /// The record's fixed wire image.
    #[must_use]
    pub fn encode(&self) -> [u8; LOGFONT_WIRE_LEN] {
        let mut out = [0u8; LOGFONT_WIRE_LEN];
        out[0..2].copy_from_slice(&self.height.to_le_bytes());
        out[2..4].copy_from_slice(&self.width.to_le_bytes());
        out[4..6].copy_from_slice(&self.escapement.to_le_bytes());
        out[6..8].copy_from_slice(&self.orientation.to_le_bytes());
        out[8..10].copy_from_slice(&self.weight.to_le_bytes());
        out[10] = u8::from(self.italic);
        out[11] = u8::from(self.underline);
        out[12] = u8::from(self.strike_out);
        out[13] = self.charset;
        out[14] = self.out_precision;
        out[15] = self.clip_precision;
        out[16] = self.quality;
        out[17] = self.pitch_and_family;
        out[18..].copy_from_slice(&self.face_name);
        out
    }
}

impl Default for LogFont {
    fn default() -> Self {
        Self {
            height: 0,
            width: 0,
            escapement: 0,
            orientation: 0,
            weight: 0,
            italic: false,
            underline: false,
            strike_out: false,
            charset: 0,
            out_precision: 0,
            clip_precision: 0,
            quality: 0,
            pitch_and_family: 0,
            face_name: [0; Self::FACE_NAME_LEN],
        }
    }
}

/// An event injected into the server's input queue, bypassing the real
/// input drivers. Both arms share one fixed payload region on the wire,
/// sized to the larger arm, with a trailing discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedEvent {
    /// Pointer state: absolute position, button mask, cursor visibility.
    Pointer {
        x: i16,
        y: i16,
        buttons: u16,
        visible: bool,
    },
    /// A key transition addressed to a window.
    Keyboard {
        window: Id,
        key: u16,
        modifiers: u16,
        scancode: u8,
        pressed: bool,
    },
}

impl InjectedEvent {
    /// The wire discriminator written after the payload region.
    #[must_use]
    pub const fn event_type(&self) -> u16 {
        match self {
            Self::Pointer { .. } => 0,
            Self::Keyboard { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_font_encodes_fixed_record() {
        let mut font = LogFont::with_face_name("fixed");
        font.height = 13;
        font.weight = 400;
        font.italic = true;
        let image = font.encode();
        assert_eq!(image.len(), LOGFONT_WIRE_LEN);
        assert_eq!(&image[0..2], &13i16.to_le_bytes());
        assert_eq!(&image[8..10], &400i16.to_le_bytes());
        assert_eq!(image[10], 1);
        assert_eq!(&image[18..23], b"fixed");
        assert_eq!(image[23], 0);
    }

    #[test]
    fn long_face_names_truncate_with_nul() {
        let font = LogFont::with_face_name(&"x".repeat(100));
        assert_eq!(font.face_name[LogFont::FACE_NAME_LEN - 1], 0);
        assert_eq!(font.face_name[LogFont::FACE_NAME_LEN - 2], b'x');
    }

    #[test]
    fn event_type_discriminates_arms() {
        let pointer = InjectedEvent::Pointer {
            x: 0,
            y: 0,
            buttons: 0,
            visible: true,
        };
        let keyboard = InjectedEvent::Keyboard {
            window: 1,
            key: b'a'.into(),
            modifiers: 0,
            scancode: 30,
            pressed: true,
        };
        assert_ne!(pointer.event_type(), keyboard.event_type());
    }
}

//! The request catalog: fixed-field shapes for every opcode.
//!
//! This is data, not logic. Each opcode maps to a field list (widths only;
//! the typed builders live in the `requests` crate) and a flag saying
//! whether a variable tail may follow. The buffer manager derives request
//! sizes from here and from nothing else.

use crate::opcode::Opcode;
use crate::profile::Profile;
use crate::REQ_HEADER_LEN;

/// On-wire size of the inline palette in a `SetSystemPalette` request:
/// 256 three-byte r/g/b entries.
pub const PALETTE_WIRE_LEN: usize = 256 * 3;

/// On-wire size of the logical-font record in a `CreateLogFont` request.
pub const LOGFONT_WIRE_LEN: usize = 82;

/// On-wire size of the format tag in a `CreateFontFromBuffer` request.
pub const FONT_FORMAT_LEN: usize = 16;

/// A single fixed field, described by width only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Resource identifier; width follows the profile.
    Id,
    /// Signed 16-bit coordinate or count.
    I16,
    /// Unsigned 16-bit flag, mode, or index.
    U16,
    /// Unsigned 32-bit color, mask, size, or handle.
    U32,
    /// Fixed-length embedded blob (palette, font record, format tag).
    Raw(usize),
    /// The injected-event payload: pointer and keyboard arms share one
    /// region sized to the larger of the two.
    EventPayload,
}

impl Field {
    /// Width of this field in bytes under the given profile.
    #[must_use]
    pub const fn width(self, profile: Profile) -> usize {
        match self {
            Self::Id => profile.id_bytes(),
            Self::I16 | Self::U16 => 2,
            Self::U32 => 4,
            Self::Raw(len) => len,
            Self::EventPayload => event_payload_len(profile),
        }
    }
}

/// Width of the injected-event payload region.
///
/// The pointer arm is 7 bytes; the keyboard arm is an identifier plus
/// 6 bytes. The region is sized to whichever is larger so both arms are
/// framed identically.
#[must_use]
pub const fn event_payload_len(profile: Profile) -> usize {
    let keyboard = profile.id_bytes() + 6;
    if keyboard > 7 {
        keyboard
    } else {
        7
    }
}

/// One catalog entry: the fixed fields after the header, and whether a
/// variable tail may follow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Fixed fields in wire order, header excluded.
    pub fields: &'static [Field],
    /// Whether the opcode carries derived-length trailing bytes.
    pub has_tail: bool,
}

impl Layout {
    const fn fixed(fields: &'static [Field]) -> Self {
        Self {
            fields,
            has_tail: false,
        }
    }

    const fn with_tail(fields: &'static [Field]) -> Self {
        Self {
            fields,
            has_tail: true,
        }
    }

    /// Total fixed length in bytes, header included.
    #[must_use]
    pub const fn fixed_len(&self, profile: Profile) -> usize {
        let mut len = REQ_HEADER_LEN;
        let mut i = 0;
        while i < self.fields.len() {
            len += self.fields[i].width(profile);
            i += 1;
        }
        len
    }
}

/// Named field lists shared across catalog entries.
mod fields {
    use super::Field::{self, EventPayload, Id, Raw, I16, U16, U32};
    use super::{FONT_FORMAT_LEN, LOGFONT_WIRE_LEN, PALETTE_WIRE_LEN};

    pub const NONE: &[Field] = &[];
    pub const ONE_ID: &[Field] = &[Id];
    pub const TWO_IDS: &[Field] = &[Id, Id];
    pub const THREE_IDS: &[Field] = &[Id, Id, Id];
    pub const ID_I16: &[Field] = &[Id, I16];
    pub const ID_PAIR16: &[Field] = &[Id, I16, I16];
    pub const ID_GEOM: &[Field] = &[Id, I16, I16, I16, I16];
    pub const ID_U16: &[Field] = &[Id, U16];
    pub const ID_U32: &[Field] = &[Id, U32];
    pub const TWO_IDS_XY: &[Field] = &[Id, Id, I16, I16];
    pub const DRAW_GEOM: &[Field] = &[Id, Id, I16, I16, I16, I16];
    pub const ONE_U16: &[Field] = &[U16];
    pub const ONE_U32: &[Field] = &[U32];
    pub const TWO_U32: &[Field] = &[U32, U32];
    pub const XY: &[Field] = &[I16, I16];
    pub const WH: &[Field] = &[I16, I16];

    pub const NEW_WINDOW: &[Field] = &[Id, I16, I16, I16, I16, U32, U32, I16];
    pub const CLEAR_AREA: &[Field] = &[Id, I16, I16, I16, I16, U16];
    pub const GC_TEXT_SIZE: &[Field] = &[Id, U32, U32];
    pub const AREA: &[Field] = &[Id, Id, I16, I16, I16, I16, I16, I16];
    pub const TEXT: &[Field] = &[Id, Id, I16, I16, I16, I16, U32];
    pub const NEW_CURSOR: &[Field] = &[I16, I16, I16, I16, U32, U32];
    pub const DRAW_IMAGE_FROM_FILE: &[Field] = &[Id, Id, I16, I16, I16, I16, Id];
    pub const NEW_PIXMAP_EX: &[Field] = &[I16, I16, U32];
    pub const COPY_AREA: &[Field] = &[Id, Id, I16, I16, I16, I16, Id, I16, I16, U32];
    pub const SET_SYSTEM_PALETTE: &[Field] = &[I16, I16, Raw(PALETTE_WIRE_LEN)];
    pub const INJECT_EVENT: &[Field] = &[EventPayload, U16];
    pub const NEW_POLYGON_REGION: &[Field] = &[U16, U16];
    pub const ARC: &[Field] = &[Id, Id, I16, I16, I16, I16, I16, I16, I16, I16, I16];
    pub const ARC_ANGLE: &[Field] = &[Id, Id, I16, I16, I16, I16, I16, I16, I16];
    pub const DRAW_IMAGE_BITS: &[Field] = &[
        Id, Id, I16, I16, I16, I16, I16, I16, I16, I16, U32, U32, U32,
    ];
    pub const REQUEST_CLIENT_DATA: &[Field] = &[Id, Id, U32, U16];
    pub const SEND_CLIENT_DATA: &[Field] = &[Id, Id, U32, U32];
    pub const ID_ID_U32: &[Field] = &[Id, Id, U32];
    pub const LOAD_IMAGE_FROM_BUFFER: &[Field] = &[U32, I16, I16];
    pub const DRAW_IMAGE_FROM_BUFFER: &[Field] = &[Id, Id, I16, I16, I16, I16, U32, Id];
    pub const ID_TWO_U32: &[Field] = &[Id, U32, U32];
    pub const SET_GC_TILE: &[Field] = &[Id, Id, I16, I16];
    pub const SET_WINDOW_REGION: &[Field] = &[Id, Id, U16];
    pub const CREATE_LOG_FONT: &[Field] = &[Raw(LOGFONT_WIRE_LEN)];
    pub const STRETCH_AREA: &[Field] = &[
        Id, Id, I16, I16, I16, I16, Id, I16, I16, I16, I16, U32,
    ];
    pub const GRAB_KEY: &[Field] = &[Id, I16, U16];
    pub const SET_TRANSFORM: &[Field] = &[U32, U32, U32, U32, U32, U32, U32, U32];
    pub const CREATE_FONT_FROM_BUFFER: &[Field] = &[U32, Raw(FONT_FORMAT_LEN), I16, I16];
    pub const DRAW_IMAGE_PART_TO_FIT: &[Field] = &[
        Id, Id, I16, I16, I16, I16, I16, I16, I16, I16, Id,
    ];
}

impl Opcode {
    /// The catalog entry for this opcode.
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            // Header-only requests
            Self::Close
            | Self::GetScreenInfo
            | Self::NewGc
            | Self::GetNextEvent
            | Self::CheckNextEvent
            | Self::PeekEvent
            | Self::GetSystemPalette
            | Self::NewRegion
            | Self::GetFocus
            | Self::GetSelectionOwner
            | Self::Bell
            | Self::QueryPointer
            | Self::GetFontList => Layout::fixed(fields::NONE),

            // One identifier
            Self::DestroyWindow
            | Self::CopyGc
            | Self::GetGcInfo
            | Self::DestroyGc
            | Self::MapWindow
            | Self::UnmapWindow
            | Self::RaiseWindow
            | Self::LowerWindow
            | Self::GetWindowInfo
            | Self::GetFontInfo
            | Self::SetFocus
            | Self::DestroyFont
            | Self::DestroyRegion
            | Self::EmptyRegion
            | Self::GetRegionBox
            | Self::GetWmProperties
            | Self::CloseWindow
            | Self::KillWindow
            | Self::FreeImage
            | Self::GetImageInfo
            | Self::DestroyCursor
            | Self::QueryTree
            | Self::DestroyTimer => Layout::fixed(fields::ONE_ID),

            // Identifier pairs and triples
            Self::SetWindowCursor | Self::SetGcFont | Self::SetGcRegion | Self::EqualRegion => {
                Layout::fixed(fields::TWO_IDS)
            }
            Self::UnionRegion | Self::IntersectRegion | Self::SubtractRegion | Self::XorRegion => {
                Layout::fixed(fields::THREE_IDS)
            }

            // Identifier + two 16-bit scalars
            Self::MoveWindow
            | Self::ResizeWindow
            | Self::PointInRegion
            | Self::OffsetRegion
            | Self::SetGcTsOffset
            | Self::SetFontSizeEx
            | Self::SetFontAttr
            | Self::CopyFont => Layout::fixed(fields::ID_PAIR16),
            Self::SetFontRotation => Layout::fixed(fields::ID_I16),

            // Identifier + rectangle
            Self::ReadArea | Self::RectInRegion | Self::UnionRectWithRegion => {
                Layout::fixed(fields::ID_GEOM)
            }

            // Identifier + 32-bit scalar
            Self::SelectEvents
            | Self::SetGcForeground
            | Self::SetGcBackground
            | Self::SetGcForegroundPixelVal
            | Self::SetGcBackgroundPixelVal
            | Self::CreateTimer => Layout::fixed(fields::ID_U32),

            // Identifier + 16-bit scalar
            Self::SetGcUseBackground
            | Self::SetGcMode
            | Self::SetGcGraphicsExposure
            | Self::SetGcLineAttributes
            | Self::SetGcFillMode => Layout::fixed(fields::ID_U16),

            // Drawable + GC + geometry
            Self::Line | Self::Rect | Self::FillRect | Self::Ellipse | Self::FillEllipse => {
                Layout::fixed(fields::DRAW_GEOM)
            }
            Self::Point => Layout::fixed(fields::TWO_IDS_XY),
            Self::Arc => Layout::fixed(fields::ARC),
            Self::ArcAngle => Layout::fixed(fields::ARC_ANGLE),
            Self::CopyArea => Layout::fixed(fields::COPY_AREA),
            Self::StretchArea => Layout::fixed(fields::STRETCH_AREA),

            // Drawables with point-table or pixel tails
            Self::Poly | Self::FillPoly | Self::Points => Layout::with_tail(fields::TWO_IDS),
            Self::Area => Layout::with_tail(fields::AREA),
            Self::Bitmap => Layout::with_tail(fields::DRAW_GEOM),
            Self::Text => Layout::with_tail(fields::TEXT),

            // Windows
            Self::NewWindow => Layout::fixed(fields::NEW_WINDOW),
            Self::NewInputWindow => Layout::fixed(fields::ID_GEOM),
            Self::ClearArea => Layout::fixed(fields::CLEAR_AREA),
            Self::ReparentWindow => Layout::fixed(fields::TWO_IDS_XY),
            Self::SetWmProperties => Layout::with_tail(fields::ONE_ID),
            Self::SetBackgroundPixmap => Layout::fixed(fields::ID_ID_U32),
            Self::SetWindowRegion => Layout::fixed(fields::SET_WINDOW_REGION),

            // GC extras
            Self::GetGcTextSize => Layout::with_tail(fields::GC_TEXT_SIZE),
            Self::SetGcClipOrigin => Layout::fixed(fields::ID_TWO_U32),
            Self::SetGcDash => Layout::with_tail(fields::ID_U16),
            Self::SetGcStipple => Layout::with_tail(fields::ID_PAIR16),
            Self::SetGcTile => Layout::fixed(fields::SET_GC_TILE),

            // Cursor
            Self::NewCursor => Layout::with_tail(fields::NEW_CURSOR),
            Self::MoveCursor => Layout::fixed(fields::XY),

            // Regions from variable data
            Self::NewPolygonRegion => Layout::with_tail(fields::NEW_POLYGON_REGION),
            Self::NewBitmapRegion => Layout::with_tail(fields::WH),

            // Fonts
            Self::CreateFontEx => Layout::with_tail(fields::WH),
            Self::CreateLogFont => Layout::fixed(fields::CREATE_LOG_FONT),
            Self::CreateFontFromBuffer => Layout::fixed(fields::CREATE_FONT_FROM_BUFFER),

            // Images and pixmaps
            Self::DrawImageFromFile => Layout::with_tail(fields::DRAW_IMAGE_FROM_FILE),
            Self::LoadImageFromFile => Layout::with_tail(fields::WH),
            Self::NewPixmapEx => Layout::fixed(fields::NEW_PIXMAP_EX),
            Self::DrawImageToFit => Layout::fixed(fields::DRAW_IMAGE_FROM_FILE),
            Self::DrawImagePartToFit => Layout::fixed(fields::DRAW_IMAGE_PART_TO_FIT),
            Self::DrawImageBits => Layout::with_tail(fields::DRAW_IMAGE_BITS),
            Self::ImageBufferAlloc => Layout::fixed(fields::ONE_U32),
            Self::ImageBufferSend => Layout::with_tail(fields::TWO_U32),
            Self::LoadImageFromBuffer => Layout::fixed(fields::LOAD_IMAGE_FROM_BUFFER),
            Self::DrawImageFromBuffer => Layout::fixed(fields::DRAW_IMAGE_FROM_BUFFER),

            // Connection, input, events
            Self::Open => Layout::fixed(fields::ONE_U32),
            Self::InjectEvent => Layout::fixed(fields::INJECT_EVENT),
            Self::GrabKey => Layout::fixed(fields::GRAB_KEY),

            // Clipboard and client data
            Self::SetSelectionOwner => Layout::with_tail(fields::ONE_ID),
            Self::RequestClientData => Layout::fixed(fields::REQUEST_CLIENT_DATA),
            Self::SendClientData => Layout::with_tail(fields::SEND_CLIENT_DATA),

            // Screen and system
            Self::FindColor
            | Self::SetScreenSaverTimeout
            | Self::SetPortraitMode
            | Self::ReqShmCmds => Layout::fixed(fields::ONE_U32),
            Self::ShmCmdsFlush => Layout::fixed(fields::TWO_U32),
            Self::GetSysColor => Layout::fixed(fields::ONE_U16),
            Self::SetSystemPalette => Layout::fixed(fields::SET_SYSTEM_PALETTE),
            Self::SetTransform => Layout::fixed(fields::SET_TRANSFORM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths_standard() {
        let p = Profile::STANDARD;
        assert_eq!(Field::Id.width(p), 4);
        assert_eq!(Field::I16.width(p), 2);
        assert_eq!(Field::U16.width(p), 2);
        assert_eq!(Field::U32.width(p), 4);
        assert_eq!(Field::Raw(16).width(p), 16);
    }

    #[test]
    fn field_widths_compact() {
        assert_eq!(Field::Id.width(Profile::COMPACT), 2);
    }

    #[test]
    fn event_payload_is_max_of_both_arms() {
        // Keyboard arm: id + 6; pointer arm: 7
        assert_eq!(event_payload_len(Profile::STANDARD), 10);
        assert_eq!(event_payload_len(Profile::COMPACT), 8);
    }

    #[test]
    fn header_only_layouts() {
        let layout = Opcode::Close.layout();
        assert!(!layout.has_tail);
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4);
        assert_eq!(layout.fixed_len(Profile::COMPACT), 4);
    }

    #[test]
    fn move_window_fixed_len() {
        // header + id + x + y
        let layout = Opcode::MoveWindow.layout();
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 4 + 2 + 2);
        assert_eq!(layout.fixed_len(Profile::COMPACT), 4 + 2 + 2 + 2);
    }

    #[test]
    fn new_window_fixed_len() {
        // header + parent + 4 coords + 2 colors + border size
        let layout = Opcode::NewWindow.layout();
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 4 + 8 + 8 + 2);
    }

    #[test]
    fn line_fixed_len() {
        let layout = Opcode::Line.layout();
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 4 + 4 + 8);
        assert_eq!(layout.fixed_len(Profile::COMPACT), 4 + 2 + 2 + 8);
    }

    #[test]
    fn set_font_rotation_fixed_len() {
        // header + font id + tenth-degrees
        let layout = Opcode::SetFontRotation.layout();
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 4 + 2);
    }

    #[test]
    fn inject_event_fixed_len() {
        let layout = Opcode::InjectEvent.layout();
        assert!(!layout.has_tail);
        // header + payload + event_type
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 10 + 2);
        assert_eq!(layout.fixed_len(Profile::COMPACT), 4 + 8 + 2);
    }

    #[test]
    fn tailed_opcodes() {
        for opcode in [
            Opcode::Poly,
            Opcode::FillPoly,
            Opcode::Points,
            Opcode::Area,
            Opcode::Bitmap,
            Opcode::Text,
            Opcode::NewCursor,
            Opcode::GetGcTextSize,
            Opcode::SetGcDash,
            Opcode::SetGcStipple,
            Opcode::DrawImageFromFile,
            Opcode::LoadImageFromFile,
            Opcode::NewPolygonRegion,
            Opcode::NewBitmapRegion,
            Opcode::CreateFontEx,
            Opcode::DrawImageBits,
            Opcode::SetWmProperties,
            Opcode::SetSelectionOwner,
            Opcode::SendClientData,
            Opcode::ImageBufferSend,
        ] {
            assert!(opcode.layout().has_tail, "{opcode:?} should declare a tail");
        }
    }

    #[test]
    fn untailed_examples() {
        for opcode in [
            Opcode::Open,
            Opcode::NewWindow,
            Opcode::CopyArea,
            Opcode::StretchArea,
            Opcode::SetSystemPalette,
            Opcode::CreateLogFont,
            Opcode::SetTransform,
            Opcode::InjectEvent,
        ] {
            assert!(!opcode.layout().has_tail, "{opcode:?} has no tail");
        }
    }

    #[test]
    fn set_system_palette_embeds_full_palette() {
        let layout = Opcode::SetSystemPalette.layout();
        assert_eq!(
            layout.fixed_len(Profile::STANDARD),
            4 + 2 + 2 + PALETTE_WIRE_LEN
        );
    }

    #[test]
    fn create_font_from_buffer_embeds_format_tag() {
        let layout = Opcode::CreateFontFromBuffer.layout();
        assert_eq!(
            layout.fixed_len(Profile::STANDARD),
            4 + 4 + FONT_FORMAT_LEN + 2 + 2
        );
    }

    #[test]
    fn stretch_area_fixed_len() {
        // header + 2 ids + 4 dest coords + src id + 4 src coords + op
        let layout = Opcode::StretchArea.layout();
        assert_eq!(layout.fixed_len(Profile::STANDARD), 4 + 8 + 8 + 4 + 8 + 4);
    }
}

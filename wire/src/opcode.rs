//! Request opcodes.
//!
//! The numbering is protocol surface shared with every deployed peer and
//! must never change. Value 126 is the call count, not a request.

use crate::error::DecodeError;

/// Number of defined request kinds; valid opcodes are `0..TOTAL_CALLS`.
pub const TOTAL_CALLS: u8 = 126;

/// Request kind discriminator, the first byte of every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Open = 0,
    Close = 1,
    GetScreenInfo = 2,
    NewWindow = 3,
    NewInputWindow = 4,
    DestroyWindow = 5,
    NewGc = 6,
    CopyGc = 7,
    GetGcInfo = 8,
    DestroyGc = 9,
    MapWindow = 10,
    UnmapWindow = 11,
    RaiseWindow = 12,
    LowerWindow = 13,
    MoveWindow = 14,
    ResizeWindow = 15,
    GetWindowInfo = 16,
    GetFontInfo = 17,
    SetFocus = 18,
    SetWindowCursor = 19,
    ClearArea = 20,
    SelectEvents = 21,
    GetNextEvent = 22,
    CheckNextEvent = 23,
    PeekEvent = 24,
    Line = 25,
    Point = 26,
    Rect = 27,
    FillRect = 28,
    Poly = 29,
    FillPoly = 30,
    Ellipse = 31,
    FillEllipse = 32,
    SetGcForeground = 33,
    SetGcBackground = 34,
    SetGcUseBackground = 35,
    SetGcMode = 36,
    SetGcFont = 37,
    GetGcTextSize = 38,
    ReadArea = 39,
    Area = 40,
    Bitmap = 41,
    Text = 42,
    NewCursor = 43,
    MoveCursor = 44,
    GetSystemPalette = 45,
    FindColor = 46,
    ReparentWindow = 47,
    DrawImageFromFile = 48,
    LoadImageFromFile = 49,
    NewPixmapEx = 50,
    CopyArea = 51,
    SetFontSizeEx = 52,
    CreateFontEx = 53,
    DestroyFont = 54,
    ReqShmCmds = 55,
    ShmCmdsFlush = 56,
    SetFontRotation = 57,
    SetFontAttr = 58,
    SetSystemPalette = 59,
    InjectEvent = 60,
    NewRegion = 61,
    DestroyRegion = 62,
    UnionRectWithRegion = 63,
    UnionRegion = 64,
    IntersectRegion = 65,
    SetGcRegion = 66,
    SubtractRegion = 67,
    XorRegion = 68,
    PointInRegion = 69,
    RectInRegion = 70,
    EmptyRegion = 71,
    EqualRegion = 72,
    OffsetRegion = 73,
    GetRegionBox = 74,
    NewPolygonRegion = 75,
    Arc = 76,
    ArcAngle = 77,
    SetWmProperties = 78,
    GetWmProperties = 79,
    CloseWindow = 80,
    KillWindow = 81,
    DrawImageToFit = 82,
    FreeImage = 83,
    GetImageInfo = 84,
    DrawImageBits = 85,
    Points = 86,
    GetFocus = 87,
    GetSysColor = 88,
    SetScreenSaverTimeout = 89,
    SetSelectionOwner = 90,
    GetSelectionOwner = 91,
    RequestClientData = 92,
    SendClientData = 93,
    Bell = 94,
    SetBackgroundPixmap = 95,
    DestroyCursor = 96,
    QueryTree = 97,
    CreateTimer = 98,
    DestroyTimer = 99,
    SetPortraitMode = 100,
    ImageBufferAlloc = 101,
    ImageBufferSend = 102,
    LoadImageFromBuffer = 103,
    DrawImageFromBuffer = 104,
    GetFontList = 105,
    SetGcClipOrigin = 106,
    SetGcGraphicsExposure = 107,
    QueryPointer = 108,
    SetGcLineAttributes = 109,
    SetGcDash = 110,
    SetGcFillMode = 111,
    SetGcStipple = 112,
    SetGcTsOffset = 113,
    SetGcTile = 114,
    NewBitmapRegion = 115,
    SetWindowRegion = 116,
    SetGcForegroundPixelVal = 117,
    SetGcBackgroundPixelVal = 118,
    CreateLogFont = 119,
    StretchArea = 120,
    GrabKey = 121,
    SetTransform = 122,
    CreateFontFromBuffer = 123,
    CopyFont = 124,
    DrawImagePartToFit = 125,
}

/// Opcodes indexed by their wire value, for `parse`.
const OPCODES: [Opcode; TOTAL_CALLS as usize] = [
    Opcode::Open,
    Opcode::Close,
    Opcode::GetScreenInfo,
    Opcode::NewWindow,
    Opcode::NewInputWindow,
    Opcode::DestroyWindow,
    Opcode::NewGc,
    Opcode::CopyGc,
    Opcode::GetGcInfo,
    Opcode::DestroyGc,
    Opcode::MapWindow,
    Opcode::UnmapWindow,
    Opcode::RaiseWindow,
    Opcode::LowerWindow,
    Opcode::MoveWindow,
    Opcode::ResizeWindow,
    Opcode::GetWindowInfo,
    Opcode::GetFontInfo,
    Opcode::SetFocus,
    Opcode::SetWindowCursor,
    Opcode::ClearArea,
    Opcode::SelectEvents,
    Opcode::GetNextEvent,
    Opcode::CheckNextEvent,
    Opcode::PeekEvent,
    Opcode::Line,
    Opcode::Point,
    Opcode::Rect,
    Opcode::FillRect,
    Opcode::Poly,
    Opcode::FillPoly,
    Opcode::Ellipse,
    Opcode::FillEllipse,
    Opcode::SetGcForeground,
    Opcode::SetGcBackground,
    Opcode::SetGcUseBackground,
    Opcode::SetGcMode,
    Opcode::SetGcFont,
    Opcode::GetGcTextSize,
    Opcode::ReadArea,
    Opcode::Area,
    Opcode::Bitmap,
    Opcode::Text,
    Opcode::NewCursor,
    Opcode::MoveCursor,
    Opcode::GetSystemPalette,
    Opcode::FindColor,
    Opcode::ReparentWindow,
    Opcode::DrawImageFromFile,
    Opcode::LoadImageFromFile,
    Opcode::NewPixmapEx,
    Opcode::CopyArea,
    Opcode::SetFontSizeEx,
    Opcode::CreateFontEx,
    Opcode::DestroyFont,
    Opcode::ReqShmCmds,
    Opcode::ShmCmdsFlush,
    Opcode::SetFontRotation,
    Opcode::SetFontAttr,
    Opcode::SetSystemPalette,
    Opcode::InjectEvent,
    Opcode::NewRegion,
    Opcode::DestroyRegion,
    Opcode::UnionRectWithRegion,
    Opcode::UnionRegion,
    Opcode::IntersectRegion,
    Opcode::SetGcRegion,
    Opcode::SubtractRegion,
    Opcode::XorRegion,
    Opcode::PointInRegion,
    Opcode::RectInRegion,
    Opcode::EmptyRegion,
    Opcode::EqualRegion,
    Opcode::OffsetRegion,
    Opcode::GetRegionBox,
    Opcode::NewPolygonRegion,
    Opcode::Arc,
    Opcode::ArcAngle,
    Opcode::SetWmProperties,
    Opcode::GetWmProperties,
    Opcode::CloseWindow,
    Opcode::KillWindow,
    Opcode::DrawImageToFit,
    Opcode::FreeImage,
    Opcode::GetImageInfo,
    Opcode::DrawImageBits,
    Opcode::Points,
    Opcode::GetFocus,
    Opcode::GetSysColor,
    Opcode::SetScreenSaverTimeout,
    Opcode::SetSelectionOwner,
    Opcode::GetSelectionOwner,
    Opcode::RequestClientData,
    Opcode::SendClientData,
    Opcode::Bell,
    Opcode::SetBackgroundPixmap,
    Opcode::DestroyCursor,
    Opcode::QueryTree,
    Opcode::CreateTimer,
    Opcode::DestroyTimer,
    Opcode::SetPortraitMode,
    Opcode::ImageBufferAlloc,
    Opcode::ImageBufferSend,
    Opcode::LoadImageFromBuffer,
    Opcode::DrawImageFromBuffer,
    Opcode::GetFontList,
    Opcode::SetGcClipOrigin,
    Opcode::SetGcGraphicsExposure,
    Opcode::QueryPointer,
    Opcode::SetGcLineAttributes,
    Opcode::SetGcDash,
    Opcode::SetGcFillMode,
    Opcode::SetGcStipple,
    Opcode::SetGcTsOffset,
    Opcode::SetGcTile,
    Opcode::NewBitmapRegion,
    Opcode::SetWindowRegion,
    Opcode::SetGcForegroundPixelVal,
    Opcode::SetGcBackgroundPixelVal,
    Opcode::CreateLogFont,
    Opcode::StretchArea,
    Opcode::GrabKey,
    Opcode::SetTransform,
    Opcode::CreateFontFromBuffer,
    Opcode::CopyFont,
    Opcode::DrawImagePartToFit,
];

impl Opcode {
    /// Parses an opcode from its wire value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownOpcode`] for values outside
    /// `0..TOTAL_CALLS`.
    pub fn parse(raw: u8) -> Result<Self, DecodeError> {
        OPCODES
            .get(raw as usize)
            .copied()
            .ok_or(DecodeError::UnknownOpcode { opcode: raw })
    }
}

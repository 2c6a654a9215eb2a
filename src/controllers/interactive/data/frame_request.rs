use crate::core::data::pixel_rect::PixelRect;
use crate::core::explorer::snapshot::FrameSnapshot;

/// Everything one render job needs. Built from the explorer state at submit time, so
/// edits made while the frame renders only affect later requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    pub pixel_rect: PixelRect,
    pub snapshot: FrameSnapshot,
}

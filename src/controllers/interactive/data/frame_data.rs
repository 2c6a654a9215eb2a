use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use std::time::Duration;

/// A finished frame and how long the worker spent on it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl FrameData {
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_buffer.pixel_rect()
    }
}

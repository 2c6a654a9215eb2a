use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::explorer::snapshot::FrameSnapshot;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::util::pixel_to_uv::PixelToUvError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Algorithm(PixelToUvError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToUvError> for RenderFrameError {
    fn from(err: PixelToUvError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders a whole frame from one snapshot: parallel escape-time evaluation, then the
/// snapshot's colour ramp. Always runs to completion.
pub fn render_frame(
    pixel_rect: PixelRect,
    snapshot: &FrameSnapshot,
) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = EscapeTimeAlgorithm::new(pixel_rect, *snapshot);
    let outcomes = generate_fractal_parallel_rayon(pixel_rect, &algorithm)?;

    Ok(generate_pixel_buffer(outcomes, &snapshot.ramp, pixel_rect)?)
}

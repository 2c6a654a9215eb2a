//! Pixel format conversion for framebuffer presenters.

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use std::error::Error;
use std::fmt;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialRgbPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialRgbPixel { src_len } => {
                write!(f, "RGB source length {} is not a whole number of pixels", src_len)
            }
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "RGBA destination holds {} bytes but {} are needed",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into an RGBA frame with every pixel fully opaque.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::PartialRgbPixel { src_len: src.len() });
    }

    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }

    Ok(())
}

/// Fills an RGBA frame with one opaque colour.
pub fn fill_rgba(dst: &mut [u8], rgb: [u8; 3]) {
    for rgba in dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(&rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }
}

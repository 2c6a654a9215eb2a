use crate::core::data::rgb::Rgb;

/// An 8-bit RGB pixel as stored in a [`PixelBuffer`](crate::core::data::pixel_buffer::PixelBuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: channel_to_byte(rgb.r),
            g: channel_to_byte(rgb.g),
            b: channel_to_byte(rgb.b),
        }
    }
}

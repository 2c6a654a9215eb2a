use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    BoundsMismatch { pixel_rect_size: usize, buffer_size: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => write!(
                f,
                "pixel rect needs {} bytes but buffer has {}",
                pixel_rect_size, buffer_size
            ),
            Self::PixelOutsideBounds { pixel, pixel_rect } => write!(
                f,
                "pixel ({}, {}) is outside {}x{} rect at ({}, {})",
                pixel.x,
                pixel.y,
                pixel_rect.width(),
                pixel_rect.height(),
                pixel_rect.top_left().x,
                pixel_rect.top_left().y
            ),
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major packed RGB bytes covering a [`PixelRect`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0)
            0, 255, 0, // (1,0)
            0, 0, 255, // (0,1)
            255, 255, 0, // (1,1)
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let pixel_rect = create_pixel_rect(2, 2);

        assert_eq!(
            PixelBuffer::from_data(pixel_rect, vec![0; 24]).unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 24
            }
        );
        assert_eq!(
            PixelBuffer::from_data(pixel_rect, vec![]).unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 0
            }
        );
    }

    #[test]
    fn test_set_pixel_uses_row_major_layout() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), red);
    }

    #[test]
    fn test_set_pixel_in_offset_rect() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 12, y: 22 }).unwrap();
        let mut buffer = PixelBuffer::new(pixel_rect);

        buffer
            .set_pixel(Point { x: 10, y: 21 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        assert_eq!(&buffer.buffer()[9..12], &[1, 2, 3]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let pixel = Point { x: 3, y: 0 };

        assert_eq!(
            buffer.set_pixel(pixel, Colour::default()),
            Err(PixelBufferError::PixelOutsideBounds { pixel, pixel_rect })
        );
    }
}

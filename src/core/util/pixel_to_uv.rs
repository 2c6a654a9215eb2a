use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToUvError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToUvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToUvError {}

/// Normalized position `(u, v)` of a pixel's centre within `pixel_rect`, both in `(0, 1)`.
///
/// Origin is the top-left corner, matching device coordinates, so the centre of pixel
/// `(x, y)` sits at device position `(x + 0.5, y + 0.5)`.
pub fn pixel_to_uv(pixel: Point, pixel_rect: PixelRect) -> Result<(f64, f64), PixelToUvError> {
    if !pixel_rect.contains_point(pixel) {
        return Err(PixelToUvError::PointOutsideRect {
            point: pixel,
            pixel_rect,
        });
    }

    let relative_x = f64::from(pixel.x - pixel_rect.top_left().x);
    let relative_y = f64::from(pixel.y - pixel_rect.top_left().y);

    Ok((
        (relative_x + 0.5) / f64::from(pixel_rect.width()),
        (relative_y + 0.5) / f64::from(pixel_rect.height()),
    ))
}

use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect must be at least 1x1, got {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// An inclusive rectangle of pixels, at least one pixel on each side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at the origin, as used for whole windows and images.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_rejects_inverted_corners() {
        let inverted = PixelRect::new(Point { x: 2, y: 2 }, Point { x: -2, y: -2 });

        assert_eq!(
            inverted,
            Err(PixelRectError::InvalidSize {
                width: -3,
                height: -3
            })
        );
    }

    #[test]
    fn test_single_pixel_rows_and_columns_are_valid() {
        let one_pixel_tall = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 0 }).unwrap();
        let single_pixel = PixelRect::new(Point { x: 5, y: 5 }, Point { x: 5, y: 5 }).unwrap();

        assert_eq!(one_pixel_tall.width(), 11);
        assert_eq!(one_pixel_tall.height(), 1);
        assert_eq!(single_pixel.size(), 1);
        assert!(single_pixel.contains_point(Point { x: 5, y: 5 }));
    }

    #[test]
    fn test_from_size_anchors_at_origin() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_from_size_rejects_degenerate_sizes() {
        assert_eq!(
            PixelRect::from_size(0, 600),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 600
            })
        );
        assert!(PixelRect::from_size(3, 0).is_err());
        assert_eq!(PixelRect::from_size(1, 1).map(|rect| rect.size()), Ok(1));
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
    }
}

use std::error::Error;
use std::fmt;

pub const DEFAULT_SCALE: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveScale { scale: f64 },
    NonPositiveScreen { width: f64, height: f64 },
    NonFiniteOffset { x_offset: f64, y_offset: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "view scale must be positive, got {}", scale)
            }
            Self::NonPositiveScreen { width, height } => {
                write!(f, "screen size must be positive, got {}x{}", width, height)
            }
            Self::NonFiniteOffset { x_offset, y_offset } => {
                write!(f, "view offset must be finite, got ({}, {})", x_offset, y_offset)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Pan/zoom of the complex plane plus the screen it is drawn on.
///
/// The shorter screen side spans exactly `scale` units. `scale` is always > 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    scale: f64,
    x_offset: f64,
    y_offset: f64,
    screen_width: f64,
    screen_height: f64,
}

fn validate_screen(width: f64, height: f64) -> Result<(), ViewStateError> {
    // written so NaN is rejected too
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(ViewStateError::NonPositiveScreen { width, height });
    }

    Ok(())
}

impl ViewState {
    pub fn new(
        scale: f64,
        x_offset: f64,
        y_offset: f64,
        screen_width: f64,
        screen_height: f64,
    ) -> Result<Self, ViewStateError> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(ViewStateError::NonPositiveScale { scale });
        }

        if !x_offset.is_finite() || !y_offset.is_finite() {
            return Err(ViewStateError::NonFiniteOffset { x_offset, y_offset });
        }

        validate_screen(screen_width, screen_height)?;

        Ok(Self {
            scale,
            x_offset,
            y_offset,
            screen_width,
            screen_height,
        })
    }

    /// Default pan/zoom on a screen of the given size.
    pub fn with_screen(screen_width: f64, screen_height: f64) -> Result<Self, ViewStateError> {
        Self::new(DEFAULT_SCALE, 0.0, 0.0, screen_width, screen_height)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    #[must_use]
    pub fn screen_width(&self) -> f64 {
        self.screen_width
    }

    #[must_use]
    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.screen_width.min(self.screen_height)
    }

    /// Updates the screen size. Invalid sizes leave the view unchanged.
    pub fn resize(&mut self, screen_width: f64, screen_height: f64) -> Result<(), ViewStateError> {
        validate_screen(screen_width, screen_height)?;

        self.screen_width = screen_width;
        self.screen_height = screen_height;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.scale = DEFAULT_SCALE;
        self.x_offset = 0.0;
        self.y_offset = 0.0;
    }

    pub(in crate::core::view) fn set_scale(&mut self, scale: f64) {
        debug_assert!(scale > 0.0);
        self.scale = scale;
    }

    pub(in crate::core::view) fn set_offset(&mut self, x_offset: f64, y_offset: f64) {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
    }
}

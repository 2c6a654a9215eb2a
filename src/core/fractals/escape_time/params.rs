use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::variant::FractalVariant;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 4.0;

/// Which recurrence to iterate and when to stop.
///
/// `escape_radius` bounds `re² + im²`, not the modulus. A radius <= 0 is accepted:
/// every pixel then stops at iteration 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    variant: FractalVariant,
    max_iterations: u32,
    escape_radius: f64,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            variant: FractalVariant::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl FractalParameters {
    pub fn new(
        variant: FractalVariant,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if escape_radius.is_nan() {
            return Err(EscapeTimeError::NanEscapeRadius);
        }

        Ok(Self {
            variant,
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    pub fn set_variant(&mut self, variant: FractalVariant) {
        self.variant = variant;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) -> Result<(), EscapeTimeError> {
        if escape_radius.is_nan() {
            return Err(EscapeTimeError::NanEscapeRadius);
        }

        self.escape_radius = escape_radius;
        Ok(())
    }
}

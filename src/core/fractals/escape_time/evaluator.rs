//! Escape-time iteration for the three supported recurrences.

use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::params::FractalParameters;
use crate::core::fractals::escape_time::variant::FractalVariant;
use std::ops::ControlFlow;

/// Where a pixel's iteration stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeOutcome {
    pub iterations: u32,
    pub max_iterations: u32,
}

impl EscapeOutcome {
    #[must_use]
    pub fn escaped(&self) -> bool {
        self.iterations < self.max_iterations
    }

    /// `iterations / max_iterations`, except that reaching the cap gives 0 rather than 1.
    #[must_use]
    pub fn escape_fraction(&self) -> f64 {
        if self.iterations == self.max_iterations {
            return 0.0;
        }

        f64::from(self.iterations) / f64::from(self.max_iterations)
    }
}

/// One application of the variant's recurrence.
#[must_use]
pub fn step(variant: FractalVariant, c: Complex, c0: Complex) -> Complex {
    match variant {
        FractalVariant::Mandelbrot => c.square() + c0,
        FractalVariant::BurningShip => c.abs_components().square() + c0,
        // the divisor uses the component-wise square
        FractalVariant::Feather => c.cube() / (Complex::ONE + c.component_square()) + c0,
    }
}

/// Iterates from `start` adding `c0` each step until `|re² + im²|` exceeds the escape
/// radius or the iteration cap is reached.
///
/// A NaN magnitude fails the bound test and stops the loop.
#[must_use]
pub fn evaluate(start: Complex, c0: Complex, params: &FractalParameters) -> EscapeOutcome {
    let max_iterations = params.max_iterations();
    let escape_radius = params.escape_radius();
    let variant = params.variant();

    let iterations = (0..max_iterations).try_fold(start, |c, iteration| {
        if (c.real * c.real + c.imag * c.imag).abs() <= escape_radius {
            ControlFlow::Continue(step(variant, c, c0))
        } else {
            ControlFlow::Break(iteration)
        }
    });

    EscapeOutcome {
        iterations: match iterations {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => max_iterations,
        },
        max_iterations,
    }
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::explorer::snapshot::FrameSnapshot;
use crate::core::fractals::escape_time::evaluator::{EscapeOutcome, evaluate};
use crate::core::util::pixel_to_uv::{PixelToUvError, pixel_to_uv};
use crate::core::view::coordinate_mapper::to_complex;

/// Evaluates one frame snapshot over a pixel rect.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    snapshot: FrameSnapshot,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, snapshot: FrameSnapshot) -> Self {
        Self {
            pixel_rect,
            snapshot,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeOutcome;
    type Failure = PixelToUvError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let (u, v) = pixel_to_uv(pixel, self.pixel_rect)?;
        let mapped = to_complex(u, v, &self.snapshot.view);
        let c0 = self.snapshot.julia.c0_for(mapped);

        Ok(evaluate(mapped, c0, &self.snapshot.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::explorer::state::ExplorerState;
    use crate::core::fractals::escape_time::julia::JuliaState;

    fn create_algorithm(width: u32, height: u32, state: &ExplorerState) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(PixelRect::from_size(width, height).unwrap(), state.snapshot())
    }

    #[test]
    fn test_centre_pixel_of_default_view_is_inside_mandelbrot() {
        // odd size so a pixel centre sits exactly on the view offset
        let state = ExplorerState::new(101.0, 101.0).unwrap();
        let algorithm = create_algorithm(101, 101, &state);

        let outcome = algorithm.compute(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(outcome.iterations, 100);
        assert_eq!(outcome.escape_fraction(), 0.0);
    }

    #[test]
    fn test_corner_pixel_far_from_origin_escapes() {
        let mut state = ExplorerState::new(100.0, 100.0).unwrap();
        for _ in 0..20 {
            state.zoom(1.0);
        }
        let algorithm = create_algorithm(100, 100, &state);

        let outcome = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert!(outcome.escaped());
    }

    #[test]
    fn test_julia_mode_adds_seed_to_every_pixel() {
        let state = ExplorerState::new(101.0, 101.0).unwrap();
        let mut snapshot = state.snapshot();
        snapshot.julia = JuliaState {
            enabled: true,
            seed: Complex::new(2.0, 2.0),
        };
        let algorithm = EscapeTimeAlgorithm::new(PixelRect::from_size(101, 101).unwrap(), snapshot);

        // the origin never escapes as a Mandelbrot point, but the seed pushes it out
        let outcome = algorithm.compute(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_compute_returns_error_for_pixel_outside_pixel_rect() {
        let state = ExplorerState::new(10.0, 10.0).unwrap();
        let algorithm = create_algorithm(10, 10, &state);
        let point = Point { x: 10, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToUvError::PointOutsideRect {
                point,
                pixel_rect: algorithm.pixel_rect()
            })
        );
    }
}

use crate::core::data::complex::Complex;
use crate::core::view::view_state::ViewState;

pub const DEFAULT_ZOOM_SPEED: f64 = 0.1;

/// Maps a normalized pixel position `(u, v)` in `[0, 1]` to the complex plane.
///
/// The shorter screen side spans `scale` units and the long side is extended to keep
/// the aspect ratio, so `(0.5, 0.5)` always lands on the view offset.
#[must_use]
pub fn to_complex(u: f64, v: f64, view: &ViewState) -> Complex {
    let min_size = view.min_size();
    let nx = (u - 0.5) * view.screen_width() / min_size;
    let ny = (v - 0.5) * view.screen_height() / min_size;

    Complex {
        real: nx * view.scale() + view.x_offset(),
        imag: ny * view.scale() + view.y_offset(),
    }
}

/// Maps a raw device (window pixel) position to the complex plane.
///
/// Agrees with [`to_complex`]: `to_complex_from_device(u * w, v * h) == to_complex(u, v)`.
#[must_use]
pub fn to_complex_from_device(device_x: f64, device_y: f64, view: &ViewState) -> Complex {
    let min_size = view.min_size();

    Complex {
        real: (device_x - 0.5 * view.screen_width()) / min_size * view.scale() + view.x_offset(),
        imag: (device_y - 0.5 * view.screen_height()) / min_size * view.scale() + view.y_offset(),
    }
}

/// Drags the plane with the pointer: offsets move opposite to the device delta.
pub fn pan_by(view: &mut ViewState, device_dx: f64, device_dy: f64) {
    let min_size = view.min_size();
    let x_offset = view.x_offset() - device_dx / min_size * view.scale();
    let y_offset = view.y_offset() - device_dy / min_size * view.scale();

    if x_offset.is_finite() && y_offset.is_finite() {
        view.set_offset(x_offset, y_offset);
    }
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Scales the view by `speed` in the direction of `direction`'s sign.
///
/// Returns whether the new scale was applied. A result that is not strictly positive
/// is ignored and the view is left as it was.
pub fn zoom_by(view: &mut ViewState, direction: f64, speed: f64) -> bool {
    let scale = view.scale();
    let new_scale = scale + sign(direction) * speed * scale;

    if new_scale > 0.0 && new_scale.is_finite() {
        view.set_scale(new_scale);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < EPSILON
                && (actual.imag - expected.imag).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn views() -> Vec<ViewState> {
        vec![
            ViewState::new(1.0, 0.0, 0.0, 800.0, 600.0).unwrap(),
            ViewState::new(0.5, -0.75, 0.1, 600.0, 800.0).unwrap(),
            ViewState::new(3.0, 1.5, -2.0, 512.0, 512.0).unwrap(),
            ViewState::new(1e-6, -1.25, 0.02, 1920.0, 200.0).unwrap(),
        ]
    }

    #[test]
    fn test_centre_maps_to_offset_for_all_aspect_ratios() {
        for view in views() {
            let centre = to_complex(0.5, 0.5, &view);

            assert_eq!(centre.real, view.x_offset());
            assert_eq!(centre.imag, view.y_offset());
        }
    }

    #[test]
    fn test_short_side_spans_scale_units() {
        let view = ViewState::new(2.0, 0.0, 0.0, 800.0, 400.0).unwrap();

        let top = to_complex(0.5, 0.0, &view);
        let bottom = to_complex(0.5, 1.0, &view);
        let left = to_complex(0.0, 0.5, &view);
        let right = to_complex(1.0, 0.5, &view);

        assert_eq!(bottom.imag - top.imag, 2.0);
        assert_eq!(right.real - left.real, 4.0);
    }

    #[test]
    fn test_device_mapping_agrees_with_normalized_mapping() {
        let samples = [(0.0, 0.0), (0.25, 0.8), (0.5, 0.5), (1.0, 1.0), (0.13, 0.97)];

        for view in views() {
            for (u, v) in samples {
                let from_device = to_complex_from_device(
                    u * view.screen_width(),
                    v * view.screen_height(),
                    &view,
                );

                assert_approx_eq(from_device, to_complex(u, v, &view));
            }
        }
    }

    #[test]
    fn test_pan_moves_offset_against_pointer_delta() {
        let mut view = ViewState::new(2.0, 0.0, 0.0, 800.0, 400.0).unwrap();

        pan_by(&mut view, 100.0, -40.0);

        assert_eq!(view.x_offset(), -0.5);
        assert_eq!(view.y_offset(), 0.2);
    }

    #[test]
    fn test_pan_keeps_grabbed_point_under_pointer() {
        let mut view = ViewState::new(1.5, 0.3, -0.2, 640.0, 480.0).unwrap();
        let grabbed = to_complex_from_device(200.0, 100.0, &view);

        pan_by(&mut view, 35.0, -12.0);

        assert_approx_eq(to_complex_from_device(235.0, 88.0, &view), grabbed);
    }

    #[test]
    fn test_zoom_in_and_out() {
        let mut view = ViewState::with_screen(800.0, 600.0).unwrap();

        assert!(zoom_by(&mut view, 3.0, DEFAULT_ZOOM_SPEED));
        assert!((view.scale() - 1.1).abs() < EPSILON);

        assert!(zoom_by(&mut view, -0.01, DEFAULT_ZOOM_SPEED));
        assert!((view.scale() - 0.99).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_with_zero_direction_keeps_scale() {
        let mut view = ViewState::with_screen(800.0, 600.0).unwrap();

        zoom_by(&mut view, 0.0, DEFAULT_ZOOM_SPEED);

        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn test_zoom_to_non_positive_scale_is_ignored() {
        let mut view = ViewState::new(0.5, 0.0, 0.0, 800.0, 600.0).unwrap();

        assert!(!zoom_by(&mut view, -1.0, 1.0));
        assert_eq!(view.scale(), 0.5);

        assert!(!zoom_by(&mut view, -1.0, 2.5));
        assert_eq!(view.scale(), 0.5);
    }

    #[test]
    fn test_scale_stays_positive_over_any_zoom_sequence() {
        let mut view = ViewState::with_screen(800.0, 600.0).unwrap();
        let directions = [-1.0, -5.0, 2.0, -0.5, f64::NAN, -1.0, 1.0];
        let speeds = [0.1, 0.9, 1.0, 1.5, 0.999, 3.0];

        for i in 0..500 {
            let direction = directions[i % directions.len()];
            let speed = speeds[i % speeds.len()];

            zoom_by(&mut view, direction, speed);

            assert!(view.scale() > 0.0, "scale went non-positive at step {}", i);
        }
    }
}

use crate::core::data::complex::Complex;
use crate::core::view::coordinate_mapper::to_complex_from_device;
use crate::core::view::view_state::ViewState;

/// Julia mode: when enabled every pixel adds the same `seed` instead of its own coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct JuliaState {
    pub enabled: bool,
    pub seed: Complex,
}

impl JuliaState {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_seed(&mut self, seed: Complex) {
        self.seed = seed;
    }

    /// Picks the seed under a device pointer position.
    pub fn set_seed_from_pointer(
        &mut self,
        device_x: f64,
        device_y: f64,
        view: &ViewState,
        force_enable: bool,
    ) {
        self.seed = to_complex_from_device(device_x, device_y, view);

        if force_enable {
            self.enabled = true;
        }
    }

    /// The constant added on each step for a pixel mapped to `mapped`.
    #[must_use]
    pub fn c0_for(&self, mapped: Complex) -> Complex {
        if self.enabled { self.seed } else { mapped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled_at_origin() {
        let julia = JuliaState::default();

        assert!(!julia.enabled);
        assert_eq!(julia.seed, Complex::ZERO);
    }

    #[test]
    fn test_toggle_flips_enabled() {
        let mut julia = JuliaState::default();

        julia.toggle();
        assert!(julia.enabled);

        julia.toggle();
        assert!(!julia.enabled);
    }

    #[test]
    fn test_c0_uses_seed_only_when_enabled() {
        let mapped = Complex::new(0.3, -0.4);
        let mut julia = JuliaState {
            enabled: false,
            seed: Complex::new(-0.7, 0.27),
        };

        assert_eq!(julia.c0_for(mapped), mapped);

        julia.set_enabled(true);
        assert_eq!(julia.c0_for(mapped), Complex::new(-0.7, 0.27));
    }

    #[test]
    fn test_seed_from_pointer_at_screen_centre_is_view_offset() {
        let view = ViewState::new(2.0, -0.5, 0.25, 800.0, 600.0).unwrap();
        let mut julia = JuliaState::default();

        julia.set_seed_from_pointer(400.0, 300.0, &view, false);

        assert_eq!(julia.seed, Complex::new(-0.5, 0.25));
        assert!(!julia.enabled);
    }

    #[test]
    fn test_seed_from_pointer_uses_aspect_corrected_mapping() {
        let view = ViewState::new(1.0, 0.0, 0.0, 800.0, 400.0).unwrap();
        let mut julia = JuliaState::default();

        julia.set_seed_from_pointer(800.0, 0.0, &view, true);

        assert_eq!(julia.seed, Complex::new(1.0, -0.5));
        assert!(julia.enabled);
    }
}

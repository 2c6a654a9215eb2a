use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::rgb::Rgb;
use crate::core::fractals::escape_time::evaluator::EscapeOutcome;

/// `#080000`, stored exactly as its hex value parses.
pub const DEFAULT_BASE_COLOUR: Rgb = Rgb::new(8.0 / 255.0, 0.0, 0.0);
pub const DEFAULT_BLEND_COLOUR: Rgb = Rgb::new(0.0, 0.0, 1.0);

/// Linear ramp from `base` (at fraction 0) towards `base + blend` (at fraction 1).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourRamp {
    pub base: Rgb,
    pub blend: Rgb,
}

impl Default for ColourRamp {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_COLOUR,
            blend: DEFAULT_BLEND_COLOUR,
        }
    }
}

impl ColourRamp {
    /// `clamp(base + blend * fraction, 0, 1)` per channel.
    #[must_use]
    pub fn colour_at(&self, fraction: f64) -> Rgb {
        Rgb {
            r: self.base.r + self.blend.r * fraction,
            g: self.base.g + self.blend.g * fraction,
            b: self.base.b + self.blend.b * fraction,
        }
        .clamped()
    }
}

impl ColourMap<EscapeOutcome> for ColourRamp {
    fn map(&self, outcome: EscapeOutcome) -> Colour {
        Colour::from(self.colour_at(outcome.escape_fraction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_zero_is_base_colour() {
        let ramp = ColourRamp::default();

        assert_eq!(ramp.colour_at(0.0), DEFAULT_BASE_COLOUR);
    }

    #[test]
    fn test_default_ramp_drives_blue_channel() {
        let ramp = ColourRamp::default();

        assert_eq!(ramp.colour_at(0.5), Rgb::new(DEFAULT_BASE_COLOUR.r, 0.0, 0.5));
    }

    #[test]
    fn test_channels_are_clamped() {
        let ramp = ColourRamp {
            base: Rgb::new(0.8, 0.2, 0.0),
            blend: Rgb::new(1.0, -1.0, 0.5),
        };

        assert_eq!(ramp.colour_at(0.9), Rgb::new(1.0, 0.0, 0.45));
    }

    #[test]
    fn test_default_base_colour_matches_its_hex() {
        assert_eq!(Rgb::from_hex(&DEFAULT_BASE_COLOUR.to_hex()), Ok(DEFAULT_BASE_COLOUR));
        assert_eq!(DEFAULT_BASE_COLOUR.to_hex(), "#080000");
    }

    #[test]
    fn test_capped_pixels_render_as_base_colour() {
        let ramp = ColourRamp::default();
        let capped = EscapeOutcome {
            iterations: 100,
            max_iterations: 100,
        };

        assert_eq!(ramp.map(capped), Colour { r: 8, g: 0, b: 0 });
    }

    #[test]
    fn test_escaped_pixels_blend_by_fraction() {
        let ramp = ColourRamp::default();
        let escaped = EscapeOutcome {
            iterations: 50,
            max_iterations: 100,
        };

        assert_eq!(ramp.map(escaped), Colour { r: 8, g: 0, b: 128 });
    }
}

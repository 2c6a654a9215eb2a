use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColourError {
    InvalidLength { input: String },
    InvalidDigits { input: String },
}

impl fmt::Display for HexColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { input } => {
                write!(f, "hex colour '{}' must have exactly six digits", input)
            }
            Self::InvalidDigits { input } => {
                write!(f, "hex colour '{}' contains non-hexadecimal digits", input)
            }
        }
    }
}

impl Error for HexColourError {}

/// A colour with floating point channels, nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a 24-bit `#rrggbb` (or bare `rrggbb`) string, case-insensitive.
    pub fn from_hex(input: &str) -> Result<Self, HexColourError> {
        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());

        if digits.len() != 6 {
            return Err(HexColourError::InvalidLength {
                input: input.to_string(),
            });
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColourError::InvalidDigits {
                input: input.to_string(),
            });
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| HexColourError::InvalidDigits {
            input: input.to_string(),
        })?;

        Ok(Self {
            r: f64::from((value >> 16) & 0xff) / 255.0,
            g: f64::from((value >> 8) & 0xff) / 255.0,
            b: f64::from(value & 0xff) / 255.0,
        })
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1.0 / 255.0;

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        assert!((actual.r - expected.r).abs() <= TOLERANCE, "{:?} != {:?}", actual, expected);
        assert!((actual.g - expected.g).abs() <= TOLERANCE, "{:?} != {:?}", actual, expected);
        assert!((actual.b - expected.b).abs() <= TOLERANCE, "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn test_round_trip_red() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let parsed = Rgb::from_hex(&red.to_hex()).unwrap();

        assert_rgb_close(parsed, red);
    }

    #[test]
    fn test_round_trip_arbitrary_colour() {
        let colour = Rgb::new(0.03, 0.5, 0.77);
        let parsed = Rgb::from_hex(&colour.to_hex()).unwrap();

        assert_rgb_close(parsed, colour);
    }

    #[test]
    fn test_to_hex_formats_lowercase_with_hash() {
        assert_eq!(Rgb::new(0.0, 0.0, 1.0).to_hex(), "#0000ff");
        assert_eq!(Rgb::new(0.03, 0.0, 0.0).to_hex(), "#080000");
    }

    #[test]
    fn test_from_hex_accepts_bare_and_uppercase() {
        assert_eq!(Rgb::from_hex("FF0000").unwrap(), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(Rgb::from_hex("#00Ff00").unwrap(), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_from_hex_rejects_non_hex_digits() {
        assert_eq!(
            Rgb::from_hex("zzzzzz"),
            Err(HexColourError::InvalidDigits {
                input: "zzzzzz".to_string()
            })
        );
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb::from_hex("#fff"),
            Err(HexColourError::InvalidLength { .. })
        ));
        assert!(matches!(
            Rgb::from_hex(""),
            Err(HexColourError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_from_hex_rejects_signed_input() {
        // from_str_radix alone would accept a leading '+'
        assert!(Rgb::from_hex("+12345").is_err());
    }

    #[test]
    fn test_clamped() {
        let c = Rgb::new(1.5, -0.5, 0.25).clamped();
        assert_eq!(c, Rgb::new(1.0, 0.0, 0.25));
    }
}

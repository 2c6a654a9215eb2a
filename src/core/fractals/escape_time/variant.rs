use crate::core::util::loop_number::loop_number;

/// The recurrence iterated by the escape-time evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    BurningShip,
    Feather,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::BurningShip, Self::Feather];

    /// Looks a variant up by numeric id. Unknown ids fall back to Mandelbrot.
    #[must_use]
    pub fn from_id(id: i64) -> Self {
        match id {
            1 => Self::BurningShip,
            2 => Self::Feather,
            _ => Self::Mandelbrot,
        }
    }

    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Mandelbrot => 0,
            Self::BurningShip => 1,
            Self::Feather => 2,
        }
    }

    /// Steps cyclically through [`Self::ALL`]; `Mandelbrot.offset(-1) == Feather`.
    #[must_use]
    pub fn offset(self, by: i64) -> Self {
        let count = Self::ALL.len() as i64;

        Self::from_id(loop_number(self.id().saturating_add(by % count), 0, count))
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Feather => "Feather",
        }
    }
}

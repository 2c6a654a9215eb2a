use std::ops::{Add, Div, Mul};

// hand-rolled rather than num-complex so the recurrences read exactly as written
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn cube(self) -> Self {
        self * self * self
    }

    /// Absolute value of each component, not the modulus.
    #[must_use]
    pub fn abs_components(self) -> Self {
        Self {
            real: self.real.abs(),
            imag: self.imag.abs(),
        }
    }

    /// Component-wise square `(re², im²)`. Not the complex square.
    #[must_use]
    pub fn component_square(self) -> Self {
        Self {
            real: self.real * self.real,
            imag: self.imag * self.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

// No zero guard: a zero divisor yields IEEE inf/NaN components.
impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denominator = other.real * other.real + other.imag * other.imag;

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

//! Escape-time fractals: Mandelbrot, Burning Ship and Feather, each with a Julia mode.

pub mod algorithm;
pub mod colour_ramp;
pub mod errors;
pub mod evaluator;
pub mod julia;
pub mod params;
pub mod variant;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, row by row.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for y in pixel_rect.top_left().y..=pixel_rect.bottom_right().y {
        for x in pixel_rect.top_left().x..=pixel_rect.bottom_right().x {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}

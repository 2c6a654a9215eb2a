use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Every pixel is independent, so the only ordering
/// requirement is the final row-major layout, which matches
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
/// The first algorithm failure encountered is returned.
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;

    let rows: Vec<Vec<Alg::Success>> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            (x_start..=x_end)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<Alg::Success>, Alg::Failure>>()
        })
        .collect::<Result<Vec<Vec<Alg::Success>>, Alg::Failure>>()?;

    Ok(rows.into_iter().flatten().collect())
}

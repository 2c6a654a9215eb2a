use crate::core::fractals::escape_time::colour_ramp::ColourRamp;
use crate::core::fractals::escape_time::julia::JuliaState;
use crate::core::fractals::escape_time::params::FractalParameters;
use crate::core::view::view_state::ViewState;

/// Everything one frame reads, copied out of the explorer state before rendering starts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub view: ViewState,
    pub params: FractalParameters,
    pub julia: JuliaState,
    pub ramp: ColourRamp,
}

use crate::core::data::rgb::{HexColourError, Rgb};
use crate::core::explorer::command::{ExplorerCommand, ExplorerCommandError};
use crate::core::explorer::snapshot::FrameSnapshot;
use crate::core::fractals::escape_time::colour_ramp::ColourRamp;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::julia::JuliaState;
use crate::core::fractals::escape_time::params::FractalParameters;
use crate::core::fractals::escape_time::variant::FractalVariant;
use crate::core::view::coordinate_mapper::{DEFAULT_ZOOM_SPEED, pan_by, zoom_by};
use crate::core::view::view_state::{ViewState, ViewStateError};
use log::{debug, warn};

/// Mutable explorer state. Input handlers edit it between frames and each frame
/// renders from a [`FrameSnapshot`] taken with [`ExplorerState::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    view: ViewState,
    params: FractalParameters,
    julia: JuliaState,
    ramp: ColourRamp,
}

impl ExplorerState {
    pub fn new(screen_width: f64, screen_height: f64) -> Result<Self, ViewStateError> {
        Ok(Self::from_parts(
            ViewState::with_screen(screen_width, screen_height)?,
            FractalParameters::default(),
            JuliaState::default(),
            ColourRamp::default(),
        ))
    }

    #[must_use]
    pub fn from_parts(
        view: ViewState,
        params: FractalParameters,
        julia: JuliaState,
        ramp: ColourRamp,
    ) -> Self {
        Self {
            view,
            params,
            julia,
            ramp,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn params(&self) -> &FractalParameters {
        &self.params
    }

    #[must_use]
    pub fn julia(&self) -> &JuliaState {
        &self.julia
    }

    #[must_use]
    pub fn ramp(&self) -> &ColourRamp {
        &self.ramp
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            view: self.view,
            params: self.params,
            julia: self.julia,
            ramp: self.ramp,
        }
    }

    pub fn change_variant(&mut self, offset: i64) -> FractalVariant {
        let variant = self.params.variant().offset(offset);
        self.params.set_variant(variant);

        debug!("variant -> {}", variant.display_name());
        variant
    }

    pub fn set_variant(&mut self, variant: FractalVariant) {
        self.params.set_variant(variant);
    }

    pub fn toggle_julia(&mut self) {
        self.julia.toggle();
        debug!("julia mode -> {}", self.julia.enabled);
    }

    pub fn set_julia(&mut self, enabled: bool) {
        self.julia.set_enabled(enabled);
    }

    pub fn set_julia_seed_from_pointer(&mut self, device_x: f64, device_y: f64, force_enable: bool) {
        self.julia
            .set_seed_from_pointer(device_x, device_y, &self.view, force_enable);
    }

    /// Zooms by the default speed. See [`zoom_by`].
    pub fn zoom(&mut self, direction: f64) -> bool {
        self.zoom_with_speed(direction, DEFAULT_ZOOM_SPEED)
    }

    pub fn zoom_with_speed(&mut self, direction: f64, speed: f64) -> bool {
        let applied = zoom_by(&mut self.view, direction, speed);

        if !applied {
            debug!(
                "ignored zoom to non-positive scale (scale {}, direction {}, speed {})",
                self.view.scale(),
                direction,
                speed
            );
        }

        applied
    }

    pub fn pan(&mut self, device_dx: f64, device_dy: f64) {
        pan_by(&mut self.view, device_dx, device_dy);
    }

    pub fn set_base_colour_hex(&mut self, hex: &str) -> Result<(), HexColourError> {
        self.ramp.base = Rgb::from_hex(hex)?;
        Ok(())
    }

    pub fn set_blend_colour_hex(&mut self, hex: &str) -> Result<(), HexColourError> {
        self.ramp.blend = Rgb::from_hex(hex)?;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), EscapeTimeError> {
        self.params.set_max_iterations(max_iterations)
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) -> Result<(), EscapeTimeError> {
        self.params.set_escape_radius(escape_radius)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ViewStateError> {
        self.view.resize(width, height)
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Applies one command. A failed command leaves the state exactly as it was.
    pub fn apply(&mut self, command: ExplorerCommand) -> Result<(), ExplorerCommandError> {
        let result = match command {
            ExplorerCommand::ChangeVariant(offset) => {
                self.change_variant(offset);
                Ok(())
            }
            ExplorerCommand::ToggleJulia => {
                self.toggle_julia();
                Ok(())
            }
            ExplorerCommand::SetJulia(enabled) => {
                self.set_julia(enabled);
                Ok(())
            }
            ExplorerCommand::SetJuliaSeedFromPointer {
                device_x,
                device_y,
                force_enable,
            } => {
                self.set_julia_seed_from_pointer(device_x, device_y, force_enable);
                Ok(())
            }
            ExplorerCommand::Zoom(direction) => {
                self.zoom(direction);
                Ok(())
            }
            ExplorerCommand::Pan {
                device_dx,
                device_dy,
            } => {
                self.pan(device_dx, device_dy);
                Ok(())
            }
            ExplorerCommand::SetBaseColourHex(hex) => {
                self.set_base_colour_hex(&hex).map_err(ExplorerCommandError::from)
            }
            ExplorerCommand::SetBlendColourHex(hex) => {
                self.set_blend_colour_hex(&hex).map_err(ExplorerCommandError::from)
            }
            ExplorerCommand::SetMaxIterations(max_iterations) => self
                .set_max_iterations(max_iterations)
                .map_err(ExplorerCommandError::from),
            ExplorerCommand::SetEscapeRadius(escape_radius) => self
                .set_escape_radius(escape_radius)
                .map_err(ExplorerCommandError::from),
            ExplorerCommand::Resize { width, height } => {
                self.resize(width, height).map_err(ExplorerCommandError::from)
            }
            ExplorerCommand::ResetView => {
                self.reset_view();
                Ok(())
            }
        };

        if let Err(err) = &result {
            warn!("{}", err);
        }

        result
    }
}

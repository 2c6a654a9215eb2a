//! JSON settings files for the file renderer and the explorer window.
//!
//! Every field has a default, so a settings file only needs the values it changes.

use crate::core::data::complex::Complex;
use crate::core::data::rgb::{HexColourError, Rgb};
use crate::core::explorer::state::ExplorerState;
use crate::core::fractals::escape_time::colour_ramp::{
    ColourRamp, DEFAULT_BASE_COLOUR, DEFAULT_BLEND_COLOUR,
};
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::julia::JuliaState;
use crate::core::fractals::escape_time::params::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, FractalParameters,
};
use crate::core::fractals::escape_time::variant::FractalVariant;
use crate::core::view::view_state::{DEFAULT_SCALE, ViewState, ViewStateError};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::Path;

pub const DEFAULT_IMAGE_WIDTH: u32 = 800;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 600;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    UnsupportedVersion { found: u32, expected: u32 },
    InvalidColour(HexColourError),
    InvalidView(ViewStateError),
    InvalidParameters(EscapeTimeError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings file error: {}", err),
            Self::Parse(err) => write!(f, "settings are not valid JSON: {}", err),
            Self::UnsupportedVersion { found, expected } => write!(
                f,
                "settings version {} is not supported (expected {})",
                found, expected
            ),
            Self::InvalidColour(err) => write!(f, "invalid colour in settings: {}", err),
            Self::InvalidView(err) => write!(f, "invalid view in settings: {}", err),
            Self::InvalidParameters(err) => write!(f, "invalid parameters in settings: {}", err),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
            Self::InvalidColour(err) => Some(err),
            Self::InvalidView(err) => Some(err),
            Self::InvalidParameters(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<HexColourError> for SettingsError {
    fn from(err: HexColourError) -> Self {
        Self::InvalidColour(err)
    }
}

impl From<ViewStateError> for SettingsError {
    fn from(err: ViewStateError) -> Self {
        Self::InvalidView(err)
    }
}

impl From<EscapeTimeError> for SettingsError {
    fn from(err: EscapeTimeError) -> Self {
        Self::InvalidParameters(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// 0 Mandelbrot, 1 Burning Ship, 2 Feather; anything else is Mandelbrot.
    pub variant: i64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub julia_enabled: bool,
    pub julia_seed_real: f64,
    pub julia_seed_imag: f64,
    pub base_colour: String,
    pub blend_colour: String,
}

impl ExplorerSettings {
    pub const CURRENT_VERSION: u32 = 1;

    /// Builds explorer state for a `width` x `height` screen.
    pub fn into_state(&self) -> Result<ExplorerState, SettingsError> {
        let view = ViewState::new(
            self.scale,
            self.x_offset,
            self.y_offset,
            f64::from(self.width),
            f64::from(self.height),
        )?;

        let params = FractalParameters::new(
            FractalVariant::from_id(self.variant),
            self.max_iterations,
            self.escape_radius,
        )?;

        let julia = JuliaState {
            enabled: self.julia_enabled,
            seed: Complex::new(self.julia_seed_real, self.julia_seed_imag),
        };

        let ramp = ColourRamp {
            base: Rgb::from_hex(&self.base_colour)?,
            blend: Rgb::from_hex(&self.blend_colour)?,
        };

        Ok(ExplorerState::from_parts(view, params, julia, ramp))
    }

    #[must_use]
    pub fn from_state(state: &ExplorerState, width: u32, height: u32) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            width,
            height,
            scale: state.view().scale(),
            x_offset: state.view().x_offset(),
            y_offset: state.view().y_offset(),
            variant: state.params().variant().id(),
            max_iterations: state.params().max_iterations(),
            escape_radius: state.params().escape_radius(),
            julia_enabled: state.julia().enabled,
            julia_seed_real: state.julia().seed.real,
            julia_seed_imag: state.julia().seed.imag,
            base_colour: state.ramp().base.to_hex(),
            blend_colour: state.ramp().blend.to_hex(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;

        if settings.version != Self::CURRENT_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: settings.version,
                expected: Self::CURRENT_VERSION,
            });
        }

        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            scale: DEFAULT_SCALE,
            x_offset: 0.0,
            y_offset: 0.0,
            variant: FractalVariant::default().id(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            julia_enabled: false,
            julia_seed_real: 0.0,
            julia_seed_imag: 0.0,
            base_colour: DEFAULT_BASE_COLOUR.to_hex(),
            blend_colour: DEFAULT_BLEND_COLOUR.to_hex(),
        }
    }
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<ExplorerSettings, SettingsError> {
    let path = path.as_ref();
    let settings = ExplorerSettings::from_json(&std::fs::read_to_string(path)?)?;

    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(
    path: impl AsRef<Path>,
    settings: &ExplorerSettings,
) -> Result<(), SettingsError> {
    let path = path.as_ref();
    std::fs::write(path, settings.to_json()?)?;

    info!("Saved settings to {}", path.display());
    Ok(())
}

use crate::core::data::rgb::HexColourError;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::view::view_state::ViewStateError;
use std::error::Error;
use std::fmt;

/// A single edit to the explorer state, as produced by an input adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerCommand {
    ChangeVariant(i64),
    ToggleJulia,
    SetJulia(bool),
    SetJuliaSeedFromPointer {
        device_x: f64,
        device_y: f64,
        force_enable: bool,
    },
    Zoom(f64),
    Pan {
        device_dx: f64,
        device_dy: f64,
    },
    SetBaseColourHex(String),
    SetBlendColourHex(String),
    SetMaxIterations(u32),
    SetEscapeRadius(f64),
    Resize {
        width: f64,
        height: f64,
    },
    ResetView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerCommandError {
    Colour(HexColourError),
    Parameters(EscapeTimeError),
    View(ViewStateError),
}

impl fmt::Display for ExplorerCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colour(err) => write!(f, "colour not changed: {}", err),
            Self::Parameters(err) => write!(f, "parameters not changed: {}", err),
            Self::View(err) => write!(f, "view not changed: {}", err),
        }
    }
}

impl Error for ExplorerCommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Colour(err) => Some(err),
            Self::Parameters(err) => Some(err),
            Self::View(err) => Some(err),
        }
    }
}

impl From<HexColourError> for ExplorerCommandError {
    fn from(err: HexColourError) -> Self {
        Self::Colour(err)
    }
}

impl From<EscapeTimeError> for ExplorerCommandError {
    fn from(err: EscapeTimeError) -> Self {
        Self::Parameters(err)
    }
}

impl From<ViewStateError> for ExplorerCommandError {
    fn from(err: ViewStateError) -> Self {
        Self::View(err)
    }
}

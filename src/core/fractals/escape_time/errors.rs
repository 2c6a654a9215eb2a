use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTimeError {
    ZeroMaxIterations,
    NanEscapeRadius,
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NanEscapeRadius => write!(f, "Escape radius must be a number"),
        }
    }
}

impl Error for EscapeTimeError {}

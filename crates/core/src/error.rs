//! Construction-time configuration errors.
//!
//! Steady-state rendering never errors; the only failure surface is a bad
//! `SkylineConfig`, rejected before any generation or sampling runs. Each
//! variant states what was wrong.

use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Canvas width or height is zero.
    ZeroCanvas { width: u32, height: u32 },
    /// Building width range is empty or starts at zero.
    BadWidthRange { min: u32, max: u32 },
    /// Height cap must sit in (0, 1].
    BadHeightCap { cap: f32 },
    /// A count that must be positive was zero; names the offending field.
    ZeroCount { what: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCanvas { width, height } => {
                write!(f, "canvas must be non-empty, got {}x{}", width, height)
            }
            ConfigError::BadWidthRange { min, max } => {
                write!(f, "building width range [{}, {}) is invalid", min, max)
            }
            ConfigError::BadHeightCap { cap } => {
                write!(f, "height cap {} is outside (0, 1]", cap)
            }
            ConfigError::ZeroCount { what } => {
                write!(f, "{} must be positive", what)
            }
        }
    }
}

impl Error for ConfigError {}

//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;

/// Errors produced by the library layer, wrapping data-loading errors and
/// adding configuration and input validation failures.
///
/// Selectors that match nothing are not errors; the helpers return empty
/// rows for them.
#[derive(Debug)]
pub enum OlympicsError {
    /// Reading one of the input tables failed.
    Data(olympics_data::Error),
    /// The configuration could not be loaded or resolved.
    Config(ConfigError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for OlympicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(e) => write!(f, "Data error: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for OlympicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Data(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<olympics_data::Error> for OlympicsError {
    fn from(e: olympics_data::Error) -> Self {
        Self::Data(e)
    }
}

impl From<ConfigError> for OlympicsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

//! Custom error types for podcast-player.
//!
//! Playback intents never fail; only the edges (files, parsing, media backends)
//! return these.

use std::error::Error;
use std::fmt;
use std::io;

/// Application error types.
#[derive(Debug)]
pub enum AppError {
    /// File I/O errors
    Io(io::Error),
    /// Catalog JSON parsing errors
    Parse(String),
    /// Configuration errors
    Config(String),
    /// Catalog is unusable (e.g. empty)
    Catalog(String),
    /// Media backend could not open an element
    Media(String),
    /// An element operation was attempted with no episode selected
    NoActiveEpisode,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Catalog(msg) => write!(f, "Catalog error: {}", msg),
            AppError::Media(msg) => write!(f, "Media error: {}", msg),
            AppError::NoActiveEpisode => write!(f, "No episode is selected"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

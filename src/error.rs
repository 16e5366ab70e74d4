use thiserror::Error;

use crate::id_generator::ElementId;
use crate::rle::RleError;

/// Errors that leave the current drawing untouched when importing
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("another import is still in progress")]
    Busy,

    #[error("import ticket does not belong to the running import")]
    StaleTicket,

    #[error("Failed to read drawing: {0}")]
    Read(#[from] std::io::Error),

    #[error("Drawing is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Drawing must be a JSON array of elements")]
    NotAnArray,

    #[error("Element {index} is invalid: {reason}")]
    InvalidElement { index: usize, reason: String },

    #[error("Drawing exceeds {limit} characters")]
    TooLarge { limit: usize },

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

impl From<RleError> for ImportError {
    fn from(error: RleError) -> Self {
        match error {
            RleError::TooLarge { limit } => ImportError::TooLarge { limit },
        }
    }
}

/// Failure reported by a rendering surface
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SurfaceError(pub String);

/// Errors from PNG or RLE export. No artifact is produced when one occurs.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Snapshot failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Snapshot is empty")]
    EmptySnapshot,

    #[error("Snapshot is not a PNG image")]
    NotPng,

    #[error("Failed to serialize drawing: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur when applying a command to the model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no element with id {0}")]
    ElementNotFound(ElementId),
}

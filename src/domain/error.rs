use std::io;

use thiserror::Error;

/// Library-wide error type for dcgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The form engine failed to collect input (terminal closed, interrupted, ...).
    #[error("{0}")]
    Prompt(String),

    /// A required value was empty.
    #[error("{0}")]
    Validation(String),

    /// Template lookup with a position outside the catalog.
    #[error("Template index {index} is out of range (catalog has {len} entries)")]
    TemplateOutOfRange { index: usize, len: usize },

    /// Encoding the output document failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }
}

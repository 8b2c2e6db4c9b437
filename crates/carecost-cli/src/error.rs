//! Error types for carecost-cli

use carecost::CareCostError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Dataset file not found
    #[error("Dataset file not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Dataset could not be parsed
    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    /// Query rejected by the encoder
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Model could not be fitted or evaluated
    #[error("Model error: {0}")]
    Model(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Model(_) => ExitCode::from(1),
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidData(_) => ExitCode::from(4),
            Self::InvalidQuery(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
            Self::Json(_) => ExitCode::from(8),
        }
    }
}

impl From<CareCostError> for CliError {
    fn from(e: CareCostError) -> Self {
        match e {
            CareCostError::Io(io) => Self::Io(io),
            CareCostError::InvalidRecord { .. } | CareCostError::EmptyInput { .. } => {
                Self::InvalidData(e.to_string())
            }
            CareCostError::UnknownCategory { .. } => Self::InvalidQuery(e.to_string()),
            _ => Self::Model(e.to_string()),
        }
    }
}

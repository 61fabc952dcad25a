//! Error types for the orrery core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("invalid body: {0}")]
    InvalidBody(String),

    #[error("invalid body state at index {index}: {reason}")]
    InvalidBodyState { index: usize, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("scenario parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrreryError>;

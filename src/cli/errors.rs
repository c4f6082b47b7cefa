use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: autotrim::Error,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(autotrim::Error),

    #[error("Failed to write report {path:?}: {source}")]
    Report {
        path: PathBuf,
        source: autotrim::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Trim(#[from] autotrim::Error),
}

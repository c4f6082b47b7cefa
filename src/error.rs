//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every per-image failure of the trim pipeline has its own variant so the batch
//! layer can report it and move on; only `Directory` is fatal to a whole run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a source image could not be turned into a `PixelBuffer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("file not found")]
    NotFound,

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("corrupt data: {0}")]
    Corrupt(String),

    #[error("image must have at least 3 channels (RGB), got {0}")]
    InsufficientChannels(u8),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: DecodeFailure },

    #[error("No content found: every pixel matches the background")]
    NoContent,

    #[error("Failed to allocate {bytes} bytes for {stage} buffer")]
    Allocation { stage: &'static str, bytes: usize },

    #[error("Resampling failed: {0}")]
    Resample(String),

    #[error("Failed to write {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Output directory {} is unusable: {reason}", path.display())]
    Directory { path: PathBuf, reason: String },

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },
}

impl Error {
    pub fn resample<E: std::fmt::Display>(e: E) -> Self {
        Error::Resample(e.to_string())
    }

    /// Short machine-readable tag used in batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Decode { .. } => "decode",
            Error::NoContent => "no_content",
            Error::Allocation { .. } => "allocation",
            Error::Resample(_) => "resample",
            Error::Encode { .. } => "encode",
            Error::Directory { .. } => "directory",
            Error::InvalidBuffer(_) => "invalid_buffer",
            Error::InvalidArgument { .. } => "invalid_argument",
            Error::ZeroSize { .. } => "zero_size",
        }
    }

    /// True when no further image in the batch can succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Directory { .. })
    }
}

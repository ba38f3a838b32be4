//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::render::Diagnostics;

/// Application-level errors for occi-text.
#[derive(Error, Debug)]
pub enum AppError {
    // Codec errors
    #[error("Parse failed:\n{0}")]
    Parse(#[from] Diagnostics),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    // I/O errors
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

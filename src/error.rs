use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for stepgen.
///
/// The generation pipeline itself never fails; these errors come from the
/// host boundary (reading input, writing output, prompting) and from loading
/// configuration.
#[derive(Error, Debug)]
pub enum StepgenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feature file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid line range '{0}': expected START:END with 1 <= START <= END")]
    InvalidLineRange(String),

    #[error("Line range {start}:{end} is outside the input ({lines} lines)")]
    LineRangeOutOfBounds {
        start: usize,
        end: usize,
        lines: usize,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, StepgenError>;

//! Error types for the Texel scanning pipeline.
//!
//! Fatal conditions (configuration, directory traversal) get their own
//! variants; per-file conditions are `ScanError` values that the analyzer
//! handles by skip-and-continue.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Texel operations.
#[derive(Error, Debug)]
pub enum TexelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scanning errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Scanning errors.
///
/// `Walk` aborts the run; the other variants are per-file and recoverable.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Directory traversal failed
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// File could not be opened as an image
    #[error("Could not open {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Image reported a zero width or height
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Convenience type alias for Texel results.
pub type Result<T> = std::result::Result<T, TexelError>;

/// Convenience type alias for scan-specific results.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

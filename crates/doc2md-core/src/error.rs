//! Error types for converter lookup and conversion.

use thiserror::Error;

/// Errors surfaced by the converter directory and the backends.
///
/// Only two conditions are raised by the directory itself:
/// [`ConvertError::UnknownConverter`] for an identifier that was never
/// registered or failed its availability probe, and
/// [`ConvertError::NoConvertersAvailable`] when a file-based search finds an
/// empty available set. Per-candidate failures during a best-converter search
/// are downgraded to skip/continue and never reach the caller.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The requested converter is unknown or did not load. The message
    /// enumerates the identifiers that are currently usable.
    #[error("Converter '{requested}' not available. Available converters: {available}")]
    UnknownConverter {
        /// The identifier the caller asked for.
        requested: String,
        /// Comma-separated list of currently available identifiers.
        available: String,
    },

    /// No converter loaded successfully at startup.
    #[error("No converters available")]
    NoConvertersAvailable,

    /// An external conversion tool failed (missing output, non-zero exit).
    #[error("Tool error: {0}")]
    ToolError(String),

    /// Transport failure talking to an HTTP-backed converter.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;

//! Error types for value parsing and configuration loading.
//!
//! Validation itself never fails: non-conformance is a `false` verdict. These
//! errors only cover getting data into the library.

use thiserror::Error;

/// Errors raised while parsing values or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A YAML mapping key that has no string form (sequence or mapping).
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

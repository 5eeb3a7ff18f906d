//! Error types for harness operations.

use thiserror::Error;

/// Errors reported by a test run or a schema comparison.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// One or more assertion steps failed.
    #[error("test run `{run}` failed {} step(s): {}", .failed.len(), .failed.join(", "))]
    StepsFailed {
        /// Name of the run.
        run: String,
        /// Names of the failed steps, in the order they were asserted.
        failed: Vec<String>,
    },

    /// A schema tree could not be converted for comparison.
    #[error("schema conversion failed: {0}")]
    Schema(#[from] value_schema_core::Error),
}

/// Convenience alias for results with [`HarnessError`].
pub type Result<T> = std::result::Result<T, HarnessError>;

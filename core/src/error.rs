//! Error types for tabdiff operations

use thiserror::Error;

/// Result type alias for tabdiff operations
pub type Result<T> = std::result::Result<T, TabdiffError>;

/// Errors raised by the diff engine.
///
/// Malformed row data is never an error: a value missing from a row is
/// read as the empty string. The only failure modes are configuration
/// problems, raised before any comparison work begins.
#[derive(Debug, Error)]
pub enum TabdiffError {
    /// One or more primary key columns are absent from a dataset's headers
    #[error("primary key column(s) not found in '{dataset}': {}; available columns: {}", .missing.join(", "), .available.join(", "))]
    MissingPrimaryKey {
        dataset: String,
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// Primary key auto-detection has nothing to work with
    #[error("cannot auto-detect a primary key for '{dataset}': dataset has no columns")]
    AutoDetectFailed { dataset: String },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TabdiffError {
    pub fn missing_primary_key(
        dataset: impl Into<String>,
        missing: Vec<String>,
        available: Vec<String>,
    ) -> Self {
        Self::MissingPrimaryKey {
            dataset: dataset.into(),
            missing,
            available,
        }
    }

    pub fn auto_detect_failed(dataset: impl Into<String>) -> Self {
        Self::AutoDetectFailed {
            dataset: dataset.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

//! Cross-cutting error types for ONEKA.
//!
//! Errors specific to fetching (simulated transport failures, cancellation)
//! live in `oneka-provider`; this module only covers catalog integrity.

use thiserror::Error;

/// Catalog integrity errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (duplicate ids, empty names).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}

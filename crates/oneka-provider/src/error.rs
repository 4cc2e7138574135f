//! Provider error types.

use oneka_core::CoreError;
use thiserror::Error;

use crate::Operation;

/// Errors returned by [`crate::MockProjectsApi`] operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Injected failure standing in for a network or server error.
    #[error("{message}")]
    SimulatedTransportFailure {
        /// Which operation failed.
        operation: Operation,
        /// Human-readable message suitable for an error banner.
        message: String,
    },

    /// No project with the requested id exists.
    #[error("Project with ID {id} not found.")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The caller cancelled the request before it completed.
    #[error("{operation} was cancelled")]
    Cancelled {
        /// Which operation was abandoned.
        operation: Operation,
    },

    /// The backing catalog is invalid.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ProviderError {
    /// Whether re-invoking the same operation may succeed. Only simulated
    /// transport failures are transient.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SimulatedTransportFailure { .. })
    }
}

//! # oneka-provider
//!
//! Mock project registry API for ONEKA.
//!
//! Stands in for a remote registry: every call waits an artificial latency
//! and may fail with an injected transport error, both decided by a
//! [`FaultPolicy`] supplied at construction. The catalog is an explicitly
//! owned [`ProjectStore`]; updates return a patched copy and are never
//! written back.

mod cancel;
mod error;
mod faults;
mod patch;
mod projects;
mod store;

pub use cancel::{CancelSource, CancelToken};
pub use error::ProviderError;
pub use faults::{AlwaysFail, FaultPolicy, LatencyWindow, NeverFail, RandomFaults, ScriptedFaults};
pub use patch::{ProjectPatch, ProjectPatchBuilder};
pub use store::ProjectStore;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use oneka_config::{OperationConfig, ProviderConfig};

// ── Types ──────────────────────────────────────────────────────────

/// The three provider operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetProjects,
    GetProjectById,
    UpdateProject,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetProjects => "get_projects",
            Self::GetProjectById => "get_project_by_id",
            Self::UpdateProject => "update_project",
        }
    }

    /// Message carried by a simulated transport failure.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::GetProjects => "Failed to fetch projects from server. Please try again!",
            Self::GetProjectById => "Failed to fetch project details.",
            Self::UpdateProject => "Failed to update project!",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure probability and latency window for one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationSettings {
    pub failure_rate: f64,
    pub latency: LatencyWindow,
}

impl OperationSettings {
    /// No failures and no delay.
    pub const INSTANT: Self = Self {
        failure_rate: 0.0,
        latency: LatencyWindow::ZERO,
    };
}

impl From<&OperationConfig> for OperationSettings {
    fn from(config: &OperationConfig) -> Self {
        Self {
            failure_rate: config.failure_rate,
            latency: LatencyWindow::from_millis(config.min_delay_ms, config.max_delay_ms),
        }
    }
}

/// Per-operation settings for [`MockProjectsApi`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderSettings {
    pub fetch: OperationSettings,
    pub lookup: OperationSettings,
    pub update: OperationSettings,
}

impl ProviderSettings {
    /// No failures and no delay for any operation.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            fetch: OperationSettings::INSTANT,
            lookup: OperationSettings::INSTANT,
            update: OperationSettings::INSTANT,
        }
    }

    #[must_use]
    pub const fn for_operation(&self, operation: Operation) -> &OperationSettings {
        match operation {
            Operation::GetProjects => &self.fetch,
            Operation::GetProjectById => &self.lookup,
            Operation::UpdateProject => &self.update,
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::from(&ProviderConfig::default())
    }
}

impl From<&ProviderConfig> for ProviderSettings {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            fetch: OperationSettings::from(&config.fetch),
            lookup: OperationSettings::from(&config.lookup),
            update: OperationSettings::from(&config.update),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Asynchronous accessors over a [`ProjectStore`] with simulated latency and
/// failure.
///
/// Cheap to clone; clones share the store and the fault policy.
#[derive(Clone)]
pub struct MockProjectsApi {
    store: Arc<ProjectStore>,
    faults: Arc<dyn FaultPolicy>,
    settings: ProviderSettings,
}

impl fmt::Debug for MockProjectsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockProjectsApi")
            .field("projects", &self.store.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl MockProjectsApi {
    #[must_use]
    pub fn new(
        store: Arc<ProjectStore>,
        faults: Arc<dyn FaultPolicy>,
        settings: ProviderSettings,
    ) -> Self {
        Self {
            store,
            faults,
            settings,
        }
    }

    /// Build from loaded configuration. A configured seed gives reproducible
    /// draws; otherwise the RNG is seeded from OS entropy.
    #[must_use]
    pub fn from_config(store: Arc<ProjectStore>, config: &ProviderConfig) -> Self {
        let faults: Arc<dyn FaultPolicy> = match config.seed {
            Some(seed) => Arc::new(RandomFaults::seeded(seed)),
            None => Arc::new(RandomFaults::from_entropy()),
        };
        Self::new(store, faults, ProviderSettings::from(config))
    }

    /// The seed catalog with the default dashboard behaviour (20% / 10%
    /// failure, 1–2 s latency).
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_config(Arc::new(ProjectStore::seeded()), &ProviderConfig::default())
    }

    #[must_use]
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    #[must_use]
    pub const fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Race `request` against `token`, reporting `operation` on cancel.
    ///
    /// If the token fires first the request future is dropped, releasing its
    /// timer. A token that is already cancelled short-circuits without
    /// polling the request.
    async fn with_cancel<T, F>(
        &self,
        token: &CancelToken,
        operation: Operation,
        request: F,
    ) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        if token.is_cancelled() {
            tracing::debug!(%operation, "request cancelled before start");
            return Err(ProviderError::Cancelled { operation });
        }
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(%operation, "request cancelled in flight");
                Err(ProviderError::Cancelled { operation })
            }
            result = request => result,
        }
    }

    /// Wait the artificial latency, then roll the failure gate.
    async fn simulate(&self, operation: Operation) -> Result<(), ProviderError> {
        let settings = self.settings.for_operation(operation);
        let delay = self.faults.latency(settings.latency);
        tracing::debug!(%operation, ?delay, "simulating request latency");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.faults.should_fail(settings.failure_rate) {
            tracing::warn!(%operation, "injected transport failure");
            return Err(ProviderError::SimulatedTransportFailure {
                operation,
                message: operation.failure_message().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_follow_config() {
        let mut config = ProviderConfig::default();
        config.update.failure_rate = 0.5;
        config.lookup.min_delay_ms = 5;
        config.lookup.max_delay_ms = 10;
        let settings = ProviderSettings::from(&config);

        assert!((settings.fetch.failure_rate - 0.2).abs() < f64::EPSILON);
        assert!((settings.update.failure_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(settings.lookup.latency, LatencyWindow::from_millis(5, 10));
        assert_eq!(
            settings.for_operation(Operation::UpdateProject),
            &settings.update
        );
    }

    #[test]
    fn default_settings_match_dashboard() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.fetch.latency, LatencyWindow::from_millis(1000, 2000));
        assert_eq!(settings.lookup.latency, LatencyWindow::from_millis(1000, 2000));
        assert_eq!(settings.update.latency, LatencyWindow::from_millis(500, 1500));
    }

    #[test]
    fn failure_messages_are_distinct() {
        let messages = [
            Operation::GetProjects.failure_message(),
            Operation::GetProjectById.failure_message(),
            Operation::UpdateProject.failure_message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }

    #[test]
    fn seeded_api_serves_seed_catalog() {
        let api = MockProjectsApi::seeded();
        assert_eq!(api.store().len(), 12);
        assert!(format!("{api:?}").contains("projects: 12"));
    }
}

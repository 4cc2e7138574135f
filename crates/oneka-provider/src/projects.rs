//! Project accessors: list, lookup, and non-persistent update.

use chrono::Utc;
use oneka_core::Project;

use crate::{CancelToken, MockProjectsApi, Operation, ProjectPatch, error::ProviderError};

impl MockProjectsApi {
    /// Fetch the entire catalog, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SimulatedTransportFailure`] when the failure
    /// gate trips. The latency elapses either way.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ProviderError> {
        self.simulate(Operation::GetProjects).await?;
        tracing::debug!(count = self.store.len(), "served project catalog");
        Ok(self.store.projects().to_vec())
    }

    /// Fetch one project by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SimulatedTransportFailure`] when the failure
    /// gate trips, or [`ProviderError::NotFound`] when it passes and no
    /// project has this id.
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, ProviderError> {
        self.simulate(Operation::GetProjectById).await?;
        self.store.get(id).cloned().ok_or_else(|| {
            tracing::debug!(id, "project not found");
            ProviderError::NotFound { id: id.to_string() }
        })
    }

    /// Return a copy of the project with `patch` merged in and `last_updated`
    /// set to now.
    ///
    /// The catalog is not modified: a later fetch returns the original record.
    /// `id` is never patched; the returned project keeps the requested id.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SimulatedTransportFailure`] when the failure
    /// gate trips, or [`ProviderError::NotFound`] when it passes and no
    /// project has this id.
    pub async fn update_project(
        &self,
        id: &str,
        patch: &ProjectPatch,
    ) -> Result<Project, ProviderError> {
        self.simulate(Operation::UpdateProject).await?;
        let Some(current) = self.store.get(id) else {
            tracing::debug!(id, "update target not found");
            return Err(ProviderError::NotFound { id: id.to_string() });
        };

        let mut updated = current.clone();
        patch.apply_to(&mut updated);
        updated.last_updated = Utc::now();
        tracing::debug!(id, fields = ?patch.changed_fields(), "applied project patch");
        Ok(updated)
    }

    // ── Cancellable variants ───────────────────────────────────────────

    /// [`Self::get_projects`], abandoned when `token` fires.
    ///
    /// # Errors
    ///
    /// As [`Self::get_projects`], plus [`ProviderError::Cancelled`].
    pub async fn get_projects_cancellable(
        &self,
        token: &CancelToken,
    ) -> Result<Vec<Project>, ProviderError> {
        self.with_cancel(token, Operation::GetProjects, self.get_projects())
            .await
    }

    /// [`Self::get_project_by_id`], abandoned when `token` fires.
    ///
    /// # Errors
    ///
    /// As [`Self::get_project_by_id`], plus [`ProviderError::Cancelled`].
    pub async fn get_project_by_id_cancellable(
        &self,
        id: &str,
        token: &CancelToken,
    ) -> Result<Project, ProviderError> {
        self.with_cancel(token, Operation::GetProjectById, self.get_project_by_id(id))
            .await
    }

    /// [`Self::update_project`], abandoned when `token` fires. Nothing is
    /// returned or stamped for a cancelled update.
    ///
    /// # Errors
    ///
    /// As [`Self::update_project`], plus [`ProviderError::Cancelled`].
    pub async fn update_project_cancellable(
        &self,
        id: &str,
        patch: &ProjectPatch,
        token: &CancelToken,
    ) -> Result<Project, ProviderError> {
        self.with_cancel(
            token,
            Operation::UpdateProject,
            self.update_project(id, patch),
        )
        .await
    }
}

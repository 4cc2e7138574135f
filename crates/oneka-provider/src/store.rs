//! Owned, read-only project catalog.

use std::collections::HashSet;

use oneka_core::{CoreError, Project};

/// Built-in seed catalog: the twelve audit projects shown by the dashboard.
const SEED_CATALOG: &str = include_str!("../data/projects.json");

/// In-memory project catalog.
///
/// Constructed once and never mutated; the provider shares it behind an
/// `Arc` so concurrent requests read it without locking.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Build a store from a list of projects, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if two projects share an id or a
    /// project has an empty id or name.
    pub fn new(projects: Vec<Project>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id.trim().is_empty() {
                return Err(CoreError::Validation("project id must not be empty".into()));
            }
            if project.name.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "project {} has an empty name",
                    project.id
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }
        Ok(Self { projects })
    }

    /// Parse a JSON array of projects.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Catalog`] if the JSON is malformed, or
    /// [`CoreError::Validation`] as for [`Self::new`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// The built-in twelve-project catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded fixture fails to parse, which the crate's own
    /// tests rule out.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_json(SEED_CATALOG).expect("embedded seed catalog should parse")
    }

    /// Every project, in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneka_core::RiskLevel;

    #[test]
    fn seed_catalog_has_twelve_projects() {
        let store = ProjectStore::seeded();
        assert_eq!(store.len(), 12);
        assert_eq!(store.projects()[0].id, "PRJ-2024-001");
        assert_eq!(store.projects()[11].id, "PRJ-2024-012");
    }

    #[test]
    fn seed_catalog_critical_projects() {
        let store = ProjectStore::seeded();
        let critical: Vec<&str> = store
            .projects()
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Critical)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(critical, vec!["PRJ-2024-001", "PRJ-2024-010"]);
    }

    #[test]
    fn only_first_two_projects_carry_procurement() {
        let store = ProjectStore::seeded();
        let with_procurement: Vec<&str> = store
            .projects()
            .iter()
            .filter(|p| p.procurement.is_some())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(with_procurement, vec!["PRJ-2024-001", "PRJ-2024-002"]);
    }

    #[test]
    fn get_is_exact_match() {
        let store = ProjectStore::seeded();
        assert_eq!(store.get("PRJ-2024-003").map(|p| p.county.as_str()), Some("Mombasa"));
        assert!(store.get("prj-2024-003").is_none());
        assert!(store.get("NOPE").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let store = ProjectStore::seeded();
        let mut projects = store.projects().to_vec();
        projects.push(projects[0].clone());
        let err = ProjectStore::new(projects).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("PRJ-2024-001")));
    }

    #[test]
    fn rejects_empty_name() {
        let mut projects = ProjectStore::seeded().projects().to_vec();
        projects[3].name = "  ".into();
        assert!(matches!(
            ProjectStore::new(projects),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = ProjectStore::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CoreError::Catalog(_)));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let store = ProjectStore::from_json("[]").unwrap();
        assert!(store.is_empty());
    }
}

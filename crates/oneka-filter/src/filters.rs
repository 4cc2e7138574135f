//! Filter selection for project list and map views.

use serde::{Deserialize, Serialize};

/// Wildcard sentinel for the county filter.
pub const ALL_COUNTIES: &str = "All Counties";
/// Wildcard sentinel for the sector filter.
pub const ALL_SECTORS: &str = "All Sectors";
/// Wildcard sentinel for the risk level filter.
pub const ALL_RISK_LEVELS: &str = "All Risk Levels";
/// Wildcard sentinel for the audit status filter.
pub const ALL_AUDIT_STATUSES: &str = "All Statuses";

/// Current filter selection. Each categorical field is either its wildcard
/// sentinel or an exact value to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilters {
    /// Free text matched case-insensitively against name, id, and entity.
    pub search: String,
    pub county: String,
    pub sector: String,
    pub risk_level: String,
    pub audit_status: String,
}

impl Default for ProjectFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            county: ALL_COUNTIES.to_string(),
            sector: ALL_SECTORS.to_string(),
            risk_level: ALL_RISK_LEVELS.to_string(),
            audit_status: ALL_AUDIT_STATUSES.to_string(),
        }
    }
}

impl ProjectFilters {
    /// Return every field to its wildcard.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = county.into();
        self
    }

    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    #[must_use]
    pub fn with_risk_level(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }

    #[must_use]
    pub fn with_audit_status(mut self, audit_status: impl Into<String>) -> Self {
        self.audit_status = audit_status.into();
        self
    }
}

/// Per-call switches for [`crate::matches_filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Skip the county predicate. Used for county summaries so counts stay
    /// visible for counties other than the selected one.
    pub ignore_county: bool,
}

impl MatchOptions {
    #[must_use]
    pub const fn ignoring_county() -> Self {
        Self {
            ignore_county: true,
        }
    }
}

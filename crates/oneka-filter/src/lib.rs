//! # oneka-filter
//!
//! Pure derivations over a project catalog: filtered subsets for list views,
//! per-county summaries for the map, and portfolio totals for the dashboard.
//!
//! Nothing here mutates its input or fails. Filter values that match no
//! known county, sector, risk level, or status simply match no project.

mod filters;
mod matching;
mod options;
mod summary;

pub use filters::{
    ALL_AUDIT_STATUSES, ALL_COUNTIES, ALL_RISK_LEVELS, ALL_SECTORS, MatchOptions, ProjectFilters,
};
pub use matching::{count_active_filters, filter_projects, filter_projects_with, matches_filter};
pub use options::{AUDIT_STATUSES, COUNTIES, RISK_LEVELS, SECTORS};
pub use summary::{
    CountySummary, PortfolioSummary, RiskCounts, summarize_by_county, summarize_portfolio,
};

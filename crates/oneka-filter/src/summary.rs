//! Aggregations for the map and dashboard views.

use std::collections::HashMap;

use oneka_core::{Project, RiskLevel};
use serde::Serialize;

use crate::filters::{MatchOptions, ProjectFilters};
use crate::matching::filter_projects_with;

// ---------------------------------------------------------------------------
// County summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySummary {
    pub county: String,
    pub project_count: usize,
    /// Projects rated high or critical.
    pub high_risk_count: usize,
}

/// Per-county project and high-risk counts, largest county first.
///
/// The county filter is ignored so every county stays visible on the map;
/// all other filters apply. Counties with equal counts keep first-seen
/// catalog order.
#[must_use]
pub fn summarize_by_county(catalog: &[Project], filters: &ProjectFilters) -> Vec<CountySummary> {
    let relevant = filter_projects_with(catalog, filters, MatchOptions::ignoring_county());

    let mut groups: Vec<CountySummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for project in &relevant {
        let slot = *index.entry(project.county.as_str()).or_insert_with(|| {
            groups.push(CountySummary {
                county: project.county.clone(),
                project_count: 0,
                high_risk_count: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.project_count += 1;
        if project.is_high_risk() {
            group.high_risk_count += 1;
        }
    }

    groups.sort_by(|a, b| b.project_count.cmp(&a.project_count));
    tracing::debug!(
        projects = relevant.len(),
        counties = groups.len(),
        "summarized projects by county"
    );
    groups
}

// ---------------------------------------------------------------------------
// Portfolio summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }
}

/// Headline figures for a set of projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub project_count: usize,
    pub total_contract_sum: u64,
    pub total_paid: u64,
    /// Percentage of the total contract sum paid out. 0 when nothing is
    /// contracted.
    pub absorption_rate: f64,
    pub risk_counts: RiskCounts,
    pub high_risk_count: usize,
    /// Bids whose variance from the engineer's estimate exceeds the
    /// tolerance.
    pub flagged_bid_count: usize,
}

/// Totals and risk distribution over `projects`.
///
/// `bid_tolerance_pct` is the allowed bid variance in percent, usually
/// `GeneralConfig::bid_variance_tolerance_pct`.
#[must_use]
pub fn summarize_portfolio(projects: &[Project], bid_tolerance_pct: f64) -> PortfolioSummary {
    let mut risk_counts = RiskCounts::default();
    let mut total_contract_sum = 0_u64;
    let mut total_paid = 0_u64;
    let mut flagged_bid_count = 0;

    for project in projects {
        risk_counts.record(project.risk_level);
        total_contract_sum = total_contract_sum.saturating_add(project.contract_sum);
        total_paid = total_paid.saturating_add(project.amount_paid);
        if let Some(procurement) = &project.procurement {
            flagged_bid_count += procurement.bids_outside_tolerance(bid_tolerance_pct).len();
        }
    }

    PortfolioSummary {
        project_count: projects.len(),
        total_contract_sum,
        total_paid,
        absorption_rate: absorption_rate(total_paid, total_contract_sum),
        risk_counts,
        high_risk_count: risk_counts.critical + risk_counts.high,
        flagged_bid_count,
    }
}

#[allow(clippy::cast_precision_loss)]
fn absorption_rate(paid: u64, contracted: u64) -> f64 {
    if contracted == 0 {
        return 0.0;
    }
    paid as f64 / contracted as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(id: &str, county: &str, risk: &str, contract: u64, paid: u64) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Project {id}"),
            "county": county,
            "sector": "Health",
            "contractSum": contract,
            "amountPaid": paid,
            "riskLevel": risk,
            "auditStatus": "Verified",
            "entity": "Ministry of Health",
            "lastUpdated": "2024-11-01T09:00:00Z",
            "status": "on-track",
            "milestones": []
        }))
        .unwrap()
    }

    #[test]
    fn groups_sort_by_count_with_stable_ties() {
        let catalog = vec![
            project("A", "Kisumu", "low", 10, 5),
            project("B", "Nairobi", "critical", 10, 5),
            project("C", "Nairobi", "high", 10, 5),
            project("D", "Mombasa", "medium", 10, 5),
        ];
        let summary = summarize_by_county(&catalog, &ProjectFilters::default());
        let order: Vec<(&str, usize, usize)> = summary
            .iter()
            .map(|s| (s.county.as_str(), s.project_count, s.high_risk_count))
            .collect();
        assert_eq!(
            order,
            vec![("Nairobi", 2, 2), ("Kisumu", 1, 0), ("Mombasa", 1, 0)]
        );
    }

    #[test]
    fn county_selection_does_not_hide_other_counties() {
        let catalog = vec![
            project("A", "Kisumu", "low", 10, 5),
            project("B", "Nairobi", "critical", 10, 5),
        ];
        let filters = ProjectFilters::default().with_county("Nairobi");
        assert_eq!(summarize_by_county(&catalog, &filters).len(), 2);
    }

    #[test]
    fn empty_catalog_summaries() {
        assert!(summarize_by_county(&[], &ProjectFilters::default()).is_empty());
        let portfolio = summarize_portfolio(&[], 15.0);
        assert_eq!(portfolio.project_count, 0);
        assert!(portfolio.absorption_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn portfolio_totals_and_risk_counts() {
        let catalog = vec![
            project("A", "Kisumu", "low", 300, 150),
            project("B", "Nairobi", "critical", 500, 100),
            project("C", "Nairobi", "high", 200, 50),
        ];
        let portfolio = summarize_portfolio(&catalog, 15.0);
        assert_eq!(portfolio.total_contract_sum, 1000);
        assert_eq!(portfolio.total_paid, 300);
        assert!((portfolio.absorption_rate - 30.0).abs() < 1e-9);
        assert_eq!(portfolio.risk_counts.get(RiskLevel::Critical), 1);
        assert_eq!(portfolio.risk_counts.get(RiskLevel::Medium), 0);
        assert_eq!(portfolio.high_risk_count, 2);
        assert_eq!(portfolio.flagged_bid_count, 0);
    }
}

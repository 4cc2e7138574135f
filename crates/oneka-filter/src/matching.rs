//! Filter predicates over projects.

use oneka_core::Project;

use crate::filters::{
    ALL_AUDIT_STATUSES, ALL_COUNTIES, ALL_RISK_LEVELS, ALL_SECTORS, MatchOptions, ProjectFilters,
};

/// Whether `project` passes every active predicate in `filters`.
///
/// Empty values and wildcard sentinels are inactive. Search is a
/// case-insensitive substring test against name, id, and entity; county is
/// a substring test so "Nairobi" matches "Nairobi / Kiambu"; the remaining
/// fields require exact equality.
#[must_use]
pub fn matches_filter(project: &Project, filters: &ProjectFilters, options: MatchOptions) -> bool {
    matches_search(project, &filters.search)
        && (options.ignore_county || matches_county(project, &filters.county))
        && matches_exact(&project.sector, &filters.sector, ALL_SECTORS)
        && matches_exact(
            project.risk_level.as_str(),
            &filters.risk_level,
            ALL_RISK_LEVELS,
        )
        && matches_exact(&project.audit_status, &filters.audit_status, ALL_AUDIT_STATUSES)
}

/// Projects passing `filters`, in catalog order.
#[must_use]
pub fn filter_projects(catalog: &[Project], filters: &ProjectFilters) -> Vec<Project> {
    filter_projects_with(catalog, filters, MatchOptions::default())
}

/// [`filter_projects`] with explicit [`MatchOptions`].
#[must_use]
pub fn filter_projects_with(
    catalog: &[Project],
    filters: &ProjectFilters,
    options: MatchOptions,
) -> Vec<Project> {
    let matched: Vec<Project> = catalog
        .iter()
        .filter(|project| matches_filter(project, filters, options))
        .cloned()
        .collect();
    tracing::debug!(
        total = catalog.len(),
        matched = matched.len(),
        ignore_county = options.ignore_county,
        "filtered projects"
    );
    matched
}

/// Number of filter fields away from their default, for badge display.
///
/// `search` counts when non-empty, even if it is only whitespace.
#[must_use]
pub fn count_active_filters(filters: &ProjectFilters) -> usize {
    [
        !filters.search.is_empty(),
        filters.county != ALL_COUNTIES,
        filters.sector != ALL_SECTORS,
        filters.risk_level != ALL_RISK_LEVELS,
        filters.audit_status != ALL_AUDIT_STATUSES,
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

fn is_active(value: &str, wildcard: &str) -> bool {
    !value.is_empty() && value != wildcard
}

fn matches_search(project: &Project, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&project.name, &project.id, &project.entity]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_county(project: &Project, county: &str) -> bool {
    !is_active(county, ALL_COUNTIES) || project.county.contains(county)
}

fn matches_exact(value: &str, wanted: &str, wildcard: &str) -> bool {
    !is_active(wanted, wildcard) || value == wanted
}

#[cfg(test)]
mod tests {
    use oneka_core::Project;
    use rstest::rstest;

    use super::*;

    fn project() -> Project {
        serde_json::from_value(serde_json::json!({
            "id": "PRJ-2024-101",
            "name": "Thika Road Dualling",
            "county": "Nairobi / Kiambu",
            "sector": "Roads & Transport",
            "contractSum": 1_000_000_000_u64,
            "amountPaid": 250_000_000_u64,
            "riskLevel": "high",
            "auditStatus": "Under Review",
            "entity": "Kenya National Highways Authority",
            "lastUpdated": "2024-11-01T09:00:00Z",
            "status": "at-risk",
            "milestones": []
        }))
        .unwrap()
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("thika", true)]
    #[case("  THIKA  ", true)]
    #[case("prj-2024-101", true)]
    #[case("highways", true)]
    #[case("mombasa", false)]
    #[case("Nairobi", false)]
    fn search_cases(#[case] search: &str, #[case] expected: bool) {
        let filters = ProjectFilters::default().with_search(search);
        assert_eq!(
            matches_filter(&project(), &filters, MatchOptions::default()),
            expected
        );
    }

    #[rstest]
    #[case(ALL_COUNTIES, true)]
    #[case("", true)]
    #[case("Nairobi", true)]
    #[case("Kiambu", true)]
    #[case("nairobi", false)]
    #[case("Kisumu", false)]
    fn county_is_substring_match(#[case] county: &str, #[case] expected: bool) {
        let filters = ProjectFilters::default().with_county(county);
        assert_eq!(
            matches_filter(&project(), &filters, MatchOptions::default()),
            expected
        );
    }

    #[test]
    fn ignore_county_skips_county_predicate() {
        let filters = ProjectFilters::default().with_county("Kisumu");
        assert!(!matches_filter(&project(), &filters, MatchOptions::default()));
        assert!(matches_filter(
            &project(),
            &filters,
            MatchOptions::ignoring_county()
        ));
    }

    #[rstest]
    #[case(ProjectFilters::default().with_sector("Roads & Transport"), true)]
    #[case(ProjectFilters::default().with_sector("Roads"), false)]
    #[case(ProjectFilters::default().with_risk_level("high"), true)]
    #[case(ProjectFilters::default().with_risk_level("High"), false)]
    #[case(ProjectFilters::default().with_risk_level("catastrophic"), false)]
    #[case(ProjectFilters::default().with_audit_status("Under Review"), true)]
    #[case(ProjectFilters::default().with_audit_status("Verified"), false)]
    fn exact_fields(#[case] filters: ProjectFilters, #[case] expected: bool) {
        assert_eq!(
            matches_filter(&project(), &filters, MatchOptions::default()),
            expected
        );
    }

    #[test]
    fn predicates_combine_with_and() {
        let filters = ProjectFilters::default()
            .with_search("thika")
            .with_county("Nairobi")
            .with_sector("Roads & Transport")
            .with_risk_level("high")
            .with_audit_status("Verified");
        assert!(!matches_filter(&project(), &filters, MatchOptions::default()));
    }

    #[rstest]
    #[case(ProjectFilters::default(), 0)]
    #[case(ProjectFilters::default().with_search(" "), 1)]
    #[case(ProjectFilters::default().with_county("Nairobi").with_risk_level("low"), 2)]
    #[case(ProjectFilters::default().with_county(""), 1)]
    #[case(
        ProjectFilters::default()
            .with_search("road")
            .with_county("Nairobi")
            .with_sector("Health")
            .with_risk_level("critical")
            .with_audit_status("Verified"),
        5
    )]
    fn active_filter_count(#[case] filters: ProjectFilters, #[case] expected: usize) {
        assert_eq!(count_active_filters(&filters), expected);
    }
}

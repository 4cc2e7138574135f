//! Option lists offered by the filter controls. Each list starts with its
//! wildcard sentinel.

use crate::filters::{ALL_AUDIT_STATUSES, ALL_COUNTIES, ALL_RISK_LEVELS, ALL_SECTORS};

/// The 47 counties of Kenya.
pub const COUNTIES: &[&str] = &[
    ALL_COUNTIES,
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo-Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Murang'a",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita-Taveta",
    "Tana River",
    "Tharaka-Nithi",
    "Trans-Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
    "Nyandarua",
];

pub const SECTORS: &[&str] = &[
    ALL_SECTORS,
    "Roads & Transport",
    "Water & Sanitation",
    "Health",
    "Education",
    "Energy",
    "Agriculture",
];

/// Risk levels as their wire strings, most severe first.
pub const RISK_LEVELS: &[&str] = &[ALL_RISK_LEVELS, "critical", "high", "medium", "low"];

pub const AUDIT_STATUSES: &[&str] = &[
    ALL_AUDIT_STATUSES,
    "Verified",
    "Under Review",
    "Pending Verification",
    "Flagged - Lowball Tender",
    "Physical Verification Required",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use oneka_core::RiskLevel;

    use super::*;

    #[test]
    fn forty_seven_counties_plus_wildcard() {
        assert_eq!(COUNTIES.len(), 48);
        assert_eq!(COUNTIES[0], ALL_COUNTIES);
        let unique: HashSet<_> = COUNTIES.iter().collect();
        assert_eq!(unique.len(), COUNTIES.len());
    }

    #[test]
    fn risk_levels_match_enum() {
        let wire: Vec<&str> = RISK_LEVELS[1..].to_vec();
        let from_enum: Vec<&str> = RiskLevel::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(wire, from_enum);
    }

    #[test]
    fn every_list_leads_with_wildcard() {
        assert_eq!(SECTORS[0], ALL_SECTORS);
        assert_eq!(RISK_LEVELS[0], ALL_RISK_LEVELS);
        assert_eq!(AUDIT_STATUSES[0], ALL_AUDIT_STATUSES);
    }
}

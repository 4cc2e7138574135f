//! Risk, status, and procurement enums for ONEKA.
//!
//! Every enum serializes to the exact strings the dashboard uses
//! (`"on-track"`, `"Open Competitive Bidding"`, ...). `as_str()` returns the
//! same string so filters can compare against it without going through serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Audit risk rating of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// `high` and `critical` projects count towards high-risk totals.
    #[must_use]
    pub const fn is_high_risk(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    Completed,
    OnHold,
    Investigation,
}

impl ProjectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::AtRisk => "at-risk",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Investigation => "investigation",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProcurementMethod
// ---------------------------------------------------------------------------

/// How a tender was procured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ProcurementMethod {
    #[serde(rename = "Open Competitive Bidding")]
    OpenCompetitiveBidding,
    #[serde(rename = "Restricted Bidding")]
    RestrictedBidding,
    #[serde(rename = "Direct Procurement")]
    DirectProcurement,
}

impl ProcurementMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenCompetitiveBidding => "Open Competitive Bidding",
            Self::RestrictedBidding => "Restricted Bidding",
            Self::DirectProcurement => "Direct Procurement",
        }
    }
}

impl fmt::Display for ProcurementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProcurementStatus
// ---------------------------------------------------------------------------

/// Stage a tender has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProcurementStatus {
    TenderPlanned,
    Advertised,
    Evaluation,
    Awarded,
    Contracted,
}

impl ProcurementStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TenderPlanned => "tender-planned",
            Self::Advertised => "advertised",
            Self::Evaluation => "evaluation",
            Self::Awarded => "awarded",
            Self::Contracted => "contracted",
        }
    }
}

impl fmt::Display for ProcurementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BidderStatus
// ---------------------------------------------------------------------------

/// Outcome of a single bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BidderStatus {
    Selected,
    Bidding,
    Rejected,
}

impl BidderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Bidding => "bidding",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BidderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

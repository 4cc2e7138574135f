use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Milestone, ProcurementData, percent_of};
use crate::enums::{ProjectStatus, RiskLevel};

/// An infrastructure project under audit surveillance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier, e.g. `PRJ-2024-001`.
    pub id: String,
    pub name: String,
    /// County name. May combine counties, e.g. `Nairobi / Kiambu`.
    pub county: String,
    pub sector: String,
    /// Contract sum in whole KES.
    pub contract_sum: u64,
    /// Amount paid to date in whole KES. Conventionally `<= contract_sum`.
    pub amount_paid: u64,
    pub risk_level: RiskLevel,
    pub audit_status: String,
    /// Implementing entity.
    pub entity: String,
    pub last_updated: DateTime<Utc>,
    pub status: ProjectStatus,
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procurement: Option<ProcurementData>,
}

impl Project {
    /// Percentage of the contract sum already paid out.
    #[must_use]
    pub fn financial_progress(&self) -> f64 {
        percent_of(self.amount_paid, self.contract_sum)
    }

    /// Percentage of milestones completed.
    #[must_use]
    pub fn physical_progress(&self) -> f64 {
        let done = self.milestones.iter().filter(|m| m.completed).count();
        percent_of(done as u64, self.milestones.len() as u64)
    }

    /// Financial minus physical progress. Positive when payments run ahead
    /// of delivery.
    #[must_use]
    pub fn progress_gap(&self) -> f64 {
        self.financial_progress() - self.physical_progress()
    }

    /// First milestone that is not yet completed.
    #[must_use]
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| !m.completed)
    }

    /// Rated `high` or `critical`.
    #[must_use]
    pub const fn is_high_risk(&self) -> bool {
        self.risk_level.is_high_risk()
    }
}

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BidderStatus, ProcurementMethod, ProcurementStatus};

/// Bids whose quote deviates from the engineer's estimate by more than this
/// percentage (either direction) are outside the acceptable range.
pub const BID_VARIANCE_TOLERANCE_PCT: f64 = 15.0;

/// Tender and award record attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementData {
    pub tender_id: String,
    pub method: ProcurementMethod,
    pub tender_date: NaiveDate,
    pub closing_date: NaiveDate,
    pub published_date: NaiveDate,
    /// Engineer's estimate in whole KES.
    pub engineers_estimate: u64,
    /// Awarded contract value in whole KES.
    pub awarded_value: u64,
    pub awarded_vendor: String,
    pub total_bidders: u32,
    pub bidders: Vec<Bidder>,
    pub procurement_status: ProcurementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irregularities: Option<Vec<String>>,
}

/// A single bid submitted against a tender.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bidder {
    pub id: String,
    pub name: String,
    /// Quote in whole KES.
    pub quote: u64,
    /// Signed percentage difference from the engineer's estimate.
    pub variance: f64,
    pub status: BidderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl ProcurementData {
    /// Signed percentage difference of `amount` from the engineer's estimate.
    ///
    /// Returns `None` when there is no estimate to compare against.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn expected_variance(&self, amount: u64) -> Option<f64> {
        if self.engineers_estimate == 0 {
            return None;
        }
        let estimate = self.engineers_estimate as f64;
        Some((amount as f64 - estimate) / estimate * 100.0)
    }

    /// Variance of the awarded value from the engineer's estimate.
    #[must_use]
    pub fn award_variance(&self) -> Option<f64> {
        self.expected_variance(self.awarded_value)
    }

    /// Bidders whose recorded variance exceeds `tolerance_pct` in magnitude.
    #[must_use]
    pub fn bids_outside_tolerance(&self, tolerance_pct: f64) -> Vec<&Bidder> {
        self.bidders
            .iter()
            .filter(|b| b.variance.abs() > tolerance_pct)
            .collect()
    }

    /// The bidder marked as selected, if any.
    #[must_use]
    pub fn selected_bidder(&self) -> Option<&Bidder> {
        self.bidders
            .iter()
            .find(|b| b.status == BidderStatus::Selected)
    }
}

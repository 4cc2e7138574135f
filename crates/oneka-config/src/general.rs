//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default bid variance tolerance, in percent either side of the estimate.
const fn default_bid_variance_tolerance_pct() -> f64 {
    15.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Bids deviating from the engineer's estimate by more than this
    /// percentage are flagged.
    #[serde(default = "default_bid_variance_tolerance_pct")]
    pub bid_variance_tolerance_pct: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bid_variance_tolerance_pct: default_bid_variance_tolerance_pct(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!((config.bid_variance_tolerance_pct - 15.0).abs() < f64::EPSILON);
    }
}

//! Mock data provider configuration: failure injection and latency.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Failure probability and latency window for one provider operation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct OperationConfig {
    /// Probability in `[0, 1]` that a call fails with a simulated transport error.
    pub failure_rate: f64,
    /// Inclusive lower bound of the artificial delay, in milliseconds.
    pub min_delay_ms: u64,
    /// Exclusive upper bound of the artificial delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl OperationConfig {
    /// Defaults for `get_projects`.
    #[must_use]
    pub const fn fetch_defaults() -> Self {
        Self {
            failure_rate: 0.2,
            min_delay_ms: 1000,
            max_delay_ms: 2000,
        }
    }

    /// Defaults for `get_project_by_id`.
    #[must_use]
    pub const fn lookup_defaults() -> Self {
        Self::fetch_defaults()
    }

    /// Defaults for `update_project`.
    #[must_use]
    pub const fn update_defaults() -> Self {
        Self {
            failure_rate: 0.1,
            min_delay_ms: 500,
            max_delay_ms: 1500,
        }
    }

    /// No failures and no delay.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            failure_rate: 0.0,
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::InvalidValue {
                field: format!("provider.{section}.failure_rate"),
                reason: format!("{} is outside [0, 1]", self.failure_rate),
            });
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: format!("provider.{section}.min_delay_ms"),
                reason: format!(
                    "{} is greater than max_delay_ms {}",
                    self.min_delay_ms, self.max_delay_ms
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Seed for the fault-injection RNG. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "OperationConfig::fetch_defaults")]
    pub fetch: OperationConfig,

    #[serde(default = "OperationConfig::lookup_defaults")]
    pub lookup: OperationConfig,

    #[serde(default = "OperationConfig::update_defaults")]
    pub update: OperationConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fetch: OperationConfig::fetch_defaults(),
            lookup: OperationConfig::lookup_defaults(),
            update: OperationConfig::update_defaults(),
        }
    }
}

impl ProviderConfig {
    /// Check failure rates and delay windows of every operation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fetch.validate("fetch")?;
        self.lookup.validate("lookup")?;
        self.update.validate("update")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_behaviour() {
        let config = ProviderConfig::default();
        assert!(config.seed.is_none());
        assert!((config.fetch.failure_rate - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.fetch.min_delay_ms, 1000);
        assert_eq!(config.fetch.max_delay_ms, 2000);
        assert_eq!(config.lookup, config.fetch);
        assert!((config.update.failure_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.update.min_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_failure_rate() {
        let mut config = ProviderConfig::default();
        config.update.failure_rate = 1.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "provider.update.failure_rate"
        ));
    }

    #[test]
    fn rejects_inverted_delay_window() {
        let mut config = ProviderConfig::default();
        config.lookup.min_delay_ms = 3000;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "provider.lookup.min_delay_ms"
        ));
    }

    #[test]
    fn nan_failure_rate_is_rejected() {
        let mut config = ProviderConfig::default();
        config.fetch.failure_rate = f64::NAN;
        assert!(config.validate().is_err());
    }
}

//! Condition configuration types.
//!
//! Conditions can be described in configuration files and built at startup:
//! - `StepPolicy`: How periodic conditions compare for equality
//! - `PeriodicConfig`: Frequency and equality policy of a periodic condition
//!
//! ## Example
//!
//! ```
//! use minevent::core::{PeriodicConfig, StepPolicy};
//! use minevent::conditions::PeriodicCondition;
//!
//! let config = PeriodicConfig::new(10).with_step_policy(StepPolicy::IncludeStep);
//! let condition = PeriodicCondition::from_config(&config).unwrap();
//! assert_eq!(condition.freq(), 10);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// How two periodic conditions are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// Only the frequency is compared. Two conditions with the same
    /// frequency are equal even after one of them has been evaluated.
    #[default]
    FreqOnly,
    /// Frequency and current step must both match.
    IncludeStep,
}

/// Configuration for a periodic condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicConfig {
    /// Fire once every `freq` evaluations. Must be at least 1.
    pub freq: u64,

    /// Equality policy.
    #[serde(default)]
    pub step_policy: StepPolicy,
}

impl PeriodicConfig {
    /// Create a config with the default equality policy.
    #[must_use]
    pub const fn new(freq: u64) -> Self {
        Self {
            freq,
            step_policy: StepPolicy::FreqOnly,
        }
    }

    /// Set the equality policy (builder pattern).
    #[must_use]
    pub const fn with_step_policy(mut self, step_policy: StepPolicy) -> Self {
        self.step_policy = step_policy;
        self
    }

    /// Validate the config.
    pub fn validate(&self) -> Result<()> {
        if self.freq < 1 {
            return Err(Error::invalid_argument(format!(
                "freq must be at least 1 (received: {})",
                self.freq
            )));
        }
        Ok(())
    }
}

//! Periodic condition.
//!
//! Counts its own evaluations and is true on every `freq`-th one: with
//! `freq = 3` the pattern is false, false, true, false, false, true, ...

use std::cell::Cell;
use std::fmt;

use crate::core::{Error, PeriodicConfig, Result, StepPolicy};

use super::Condition;

/// A condition that is true once every `freq` evaluations.
#[derive(Debug)]
pub struct PeriodicCondition {
    freq: u64,
    step: Cell<u64>,
    step_policy: StepPolicy,
}

impl PeriodicCondition {
    /// Create a periodic condition. Fails if `freq` is 0.
    pub fn new(freq: u64) -> Result<Self> {
        Self::from_config(&PeriodicConfig::new(freq))
    }

    /// Create a periodic condition whose equality also compares the step.
    pub fn strict(freq: u64) -> Result<Self> {
        Self::from_config(&PeriodicConfig::new(freq).with_step_policy(StepPolicy::IncludeStep))
    }

    /// Build from configuration.
    pub fn from_config(config: &PeriodicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            freq: config.freq,
            step: Cell::new(0),
            step_policy: config.step_policy,
        })
    }

    /// The frequency.
    #[must_use]
    pub fn freq(&self) -> u64 {
        self.freq
    }

    /// Number of evaluations so far.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step.get()
    }

    /// The equality policy.
    #[must_use]
    pub fn step_policy(&self) -> StepPolicy {
        self.step_policy
    }

    /// Advance the counter and report whether this call fires.
    pub fn tick(&self) -> bool {
        let step = self.step.get().wrapping_add(1);
        self.step.set(step);
        step % self.freq == 0
    }
}

impl Condition for PeriodicCondition {
    fn evaluate(&self) -> anyhow::Result<bool> {
        Ok(self.tick())
    }

    fn equal(&self, other: &dyn Condition) -> bool {
        let Some(other) = other.as_any().downcast_ref::<PeriodicCondition>() else {
            return false;
        };
        if self.freq != other.freq {
            return false;
        }
        // Either side asking for the strict policy makes the comparison strict
        let strict = self.step_policy == StepPolicy::IncludeStep
            || other.step_policy == StepPolicy::IncludeStep;
        !strict || self.step() == other.step()
    }
}

impl TryFrom<PeriodicConfig> for PeriodicCondition {
    type Error = Error;

    fn try_from(config: PeriodicConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

impl fmt::Display for PeriodicCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeriodicCondition(freq={}, step={})", self.freq, self.step())
    }
}

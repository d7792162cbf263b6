use crate::error::{Result, SchedError};

/// Default amount added to every burst time before scheduling.
pub const DEFAULT_AGING_INCREMENT: f64 = 10.0;

/// Configuration for the scheduler engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Added once to each record's burst time per ingest, in the same unit
    /// as burst time (seconds of CPU time).
    pub aging_increment: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            aging_increment: DEFAULT_AGING_INCREMENT,
        }
    }
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aging_increment(mut self, aging_increment: f64) -> Self {
        self.aging_increment = aging_increment;
        self
    }

    /// Reject increments that would break `burst_time >= 0` or produce NaN ordering.
    pub fn validate(&self) -> Result<()> {
        if !self.aging_increment.is_finite() {
            return Err(SchedError::InvalidConfig(format!(
                "aging increment must be finite, got {}",
                self.aging_increment
            )));
        }
        if self.aging_increment < 0.0 {
            return Err(SchedError::InvalidConfig(format!(
                "aging increment must be non-negative, got {}",
                self.aging_increment
            )));
        }
        Ok(())
    }
}

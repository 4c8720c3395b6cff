//! Experiment configuration collected in the first wizard step.

use super::time::{TimeOfDay, MINUTES_PER_DAY};

/// Invariant violations in a submitted configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("trial length must be at least one minute")]
    ZeroTrialLength,
    #[error("trial length must not exceed one day (1440 minutes)")]
    TrialTooLong,
    #[error("prep time must not exceed one day (1440 minutes)")]
    PrepTooLong,
    #[error("default start {start} must be before default end {end}")]
    WindowOrder { start: TimeOfDay, end: TimeOfDay },
    #[error("lunch start {start} must be before lunch end {end}")]
    LunchOrder { start: TimeOfDay, end: TimeOfDay },
}

/// Global scheduling defaults for one experiment.
///
/// Negative trial/prep lengths are unrepresentable; a zero trial length and
/// lengths beyond one day are rejected by [`validate`](Self::validate) so the
/// generator can neither stall nor overflow its cursor arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Duration of one trial, in minutes.
    pub trial_length_min: u32,
    /// Buffer appended after each trial, in minutes.
    pub prep_time_min: u32,
    pub default_start: TimeOfDay,
    pub default_end: TimeOfDay,
    /// When true no lunch break is inserted and the lunch window is ignored.
    pub exclude_lunch: bool,
    pub lunch_start: TimeOfDay,
    pub lunch_end: TimeOfDay,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trial_length_min: 60,
            prep_time_min: 15,
            default_start: TimeOfDay::from_minutes(10 * 60),
            default_end: TimeOfDay::from_minutes(18 * 60),
            exclude_lunch: true,
            lunch_start: TimeOfDay::from_minutes(12 * 60),
            lunch_end: TimeOfDay::from_minutes(12 * 60 + 30),
        }
    }
}

impl ExperimentConfig {
    /// Check the cross-field invariants.
    ///
    /// The lunch window is only constrained while lunch is active.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_length_min == 0 {
            return Err(ConfigError::ZeroTrialLength);
        }
        if self.trial_length_min > MINUTES_PER_DAY {
            return Err(ConfigError::TrialTooLong);
        }
        if self.prep_time_min > MINUTES_PER_DAY {
            return Err(ConfigError::PrepTooLong);
        }
        if self.default_start >= self.default_end {
            return Err(ConfigError::WindowOrder {
                start: self.default_start,
                end: self.default_end,
            });
        }
        if !self.exclude_lunch && self.lunch_start >= self.lunch_end {
            return Err(ConfigError::LunchOrder {
                start: self.lunch_start,
                end: self.lunch_end,
            });
        }
        Ok(())
    }
}

/// Working window for a single selected day, seeded from the configuration
/// defaults and optionally overridden in the final wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DayWindow {
    pub fn from_defaults(config: &ExperimentConfig) -> Self {
        Self {
            start: config.default_start,
            end: config.default_end,
        }
    }
}

//! Form payloads for the three wizard steps.
//!
//! Fields arrive as strings and are converted into typed, range-checked
//! values here, before anything reaches the session store or the generator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::AppError;
use crate::models::{DayWindow, ExperimentConfig, TimeOfDay};
use crate::session::WizardState;

/// Step A: global defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigForm {
    pub trial_length: String,
    pub prep_time: String,
    pub default_start_time: String,
    pub default_end_time: String,
    /// Checkbox: present in the payload when ticked.
    #[serde(default)]
    pub exclude_lunch: Option<String>,
    #[serde(default)]
    pub lunch_start: Option<String>,
    #[serde(default)]
    pub lunch_end: Option<String>,
}

/// Step B: comma-delimited day list.
#[derive(Debug, Clone, Deserialize)]
pub struct DaysForm {
    pub experiment_days: String,
}

fn parse_minutes(field: &str, value: &str) -> Result<u32, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::BadRequest(format!(
            "{field} must be a non-negative whole number of minutes, got {value:?}"
        ))
    })
}

fn parse_time(field: &str, value: &str) -> Result<TimeOfDay, AppError> {
    value
        .parse()
        .map_err(|e| AppError::BadRequest(format!("{field}: {e}")))
}

impl ConfigForm {
    /// Convert into a validated configuration.
    ///
    /// When lunch is excluded the lunch fields are absent from the form and
    /// the session's previous lunch window is kept, as the reference flow did.
    pub fn into_config(self, previous: &ExperimentConfig) -> Result<ExperimentConfig, AppError> {
        let exclude_lunch = self.exclude_lunch.is_some();
        let (lunch_start, lunch_end) = if exclude_lunch {
            (previous.lunch_start, previous.lunch_end)
        } else {
            let start = self
                .lunch_start
                .ok_or_else(|| AppError::BadRequest("missing lunch_start".into()))?;
            let end = self
                .lunch_end
                .ok_or_else(|| AppError::BadRequest("missing lunch_end".into()))?;
            (
                parse_time("lunch_start", &start)?,
                parse_time("lunch_end", &end)?,
            )
        };

        let config = ExperimentConfig {
            trial_length_min: parse_minutes("trial_length", &self.trial_length)?,
            prep_time_min: parse_minutes("prep_time", &self.prep_time)?,
            default_start: parse_time("default_start_time", &self.default_start_time)?,
            default_end: parse_time("default_end_time", &self.default_end_time)?,
            exclude_lunch,
            lunch_start,
            lunch_end,
        };
        config.validate()?;
        Ok(config)
    }
}

impl DaysForm {
    /// Parse every comma-separated token as `YYYY-MM-DD`, preserving order
    /// and duplicates.
    pub fn into_days(self) -> Result<Vec<NaiveDate>, AppError> {
        let raw = self.experiment_days.trim();
        if raw.is_empty() {
            return Err(AppError::BadRequest("no experiment days provided".into()));
        }
        raw.split(',')
            .map(|token| {
                let token = token.trim();
                NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| {
                    AppError::BadRequest(format!(
                        "invalid date {token:?}: expected YYYY-MM-DD"
                    ))
                })
            })
            .collect()
    }
}

/// Step C: apply the `custom_start_<date>` / `custom_end_<date>` pairs from
/// the verify form onto the session's day windows. Every selected day must
/// have both fields.
pub fn apply_overrides(
    state: &mut WizardState,
    fields: &BTreeMap<String, String>,
) -> Result<(), AppError> {
    for day in state.days.clone() {
        let day_str = day.format("%Y-%m-%d").to_string();
        let start_key = format!("custom_start_{day_str}");
        let end_key = format!("custom_end_{day_str}");
        let start = fields
            .get(&start_key)
            .ok_or_else(|| AppError::BadRequest(format!("missing field {start_key}")))?;
        let end = fields
            .get(&end_key)
            .ok_or_else(|| AppError::BadRequest(format!("missing field {end_key}")))?;
        let window = DayWindow {
            start: parse_time(&start_key, start)?,
            end: parse_time(&end_key, end)?,
        };
        state.windows.insert(day, window);
    }
    Ok(())
}

//! Schedule generation.
//!
//! Pure mapping from the collected configuration and per-day windows to the
//! ordered row sequence that the exporter writes out. No I/O, no shared state.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DayWindow, ExperimentConfig, ScheduleRow, TimeOfDay, MINUTES_PER_DAY};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A zero trial length would never advance the cursor.
    #[error("trial length must be at least one minute")]
    NonPositiveTrialLength,
    /// Lengths beyond one day would overflow the cursor arithmetic.
    #[error("trial length must not exceed one day")]
    TrialTooLong,
    #[error("prep time must not exceed one day")]
    PrepTooLong,
    /// A selected day has no start/end window recorded.
    #[error("no start/end window recorded for {0}")]
    MissingWindow(NaiveDate),
}

/// Generate the full multi-day timetable.
///
/// Days are processed in the order given, duplicates included. For each day
/// the cursor starts at the window start and advances by trial length plus
/// prep time per slot; while lunch is active and the cursor lands inside the
/// lunch window, a lunch row is emitted instead and the cursor jumps to the
/// lunch end without consuming a slot number. Slot numbers restart at 1 each
/// day. A single blank separator row is placed between consecutive days.
pub fn generate(
    config: &ExperimentConfig,
    days: &[NaiveDate],
    windows: &HashMap<NaiveDate, DayWindow>,
) -> Result<Vec<ScheduleRow>, ScheduleError> {
    if config.trial_length_min == 0 {
        return Err(ScheduleError::NonPositiveTrialLength);
    }
    // with both lengths capped at one day, cursor + trial + prep stays far
    // below u32::MAX for any window start
    if config.trial_length_min > MINUTES_PER_DAY {
        return Err(ScheduleError::TrialTooLong);
    }
    if config.prep_time_min > MINUTES_PER_DAY {
        return Err(ScheduleError::PrepTooLong);
    }
    let trial = config.trial_length_min;
    let prep = config.prep_time_min;
    let lunch_start = config.lunch_start.minutes();
    let lunch_end = config.lunch_end.minutes();

    let mut rows = Vec::new();
    for (idx, day) in days.iter().enumerate() {
        let window = windows
            .get(day)
            .ok_or(ScheduleError::MissingWindow(*day))?;
        let end = window.end.minutes();
        let mut cursor = window.start.minutes();
        let mut slot = 0u32;

        while cursor + trial <= end {
            if !config.exclude_lunch && lunch_start <= cursor && cursor < lunch_end {
                rows.push(ScheduleRow::Lunch {
                    date: *day,
                    start: config.lunch_start,
                    end: config.lunch_end,
                });
                cursor = lunch_end;
                continue;
            }
            slot += 1;
            let slot_end = cursor + trial + prep;
            rows.push(ScheduleRow::Trial {
                date: *day,
                slot,
                start: TimeOfDay::from_minutes(cursor),
                end: TimeOfDay::from_minutes(slot_end),
            });
            cursor = slot_end;
        }

        if idx + 1 < days.len() {
            rows.push(ScheduleRow::Separator);
        }
    }
    Ok(rows)
}

use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;

use super::{generate, ScheduleError};
use crate::models::{DayWindow, ExperimentConfig, ScheduleRow, TimeOfDay};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn time(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn default_windows(config: &ExperimentConfig, days: &[NaiveDate]) -> HashMap<NaiveDate, DayWindow> {
    days.iter()
        .map(|d| (*d, DayWindow::from_defaults(config)))
        .collect()
}

#[test]
fn test_single_day_no_lunch() {
    // trial 60 + prep 15 in a 10:00-18:00 window: starts advance by 75 min,
    // last feasible start is 16:15 (17:30 + 60 > 18:00 stops the loop)
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&config, &days);

    let rows = generate(&config, &days, &windows).unwrap();
    let expected_starts = ["10:00", "11:15", "12:30", "13:45", "15:00", "16:15"];
    assert_eq!(rows.len(), expected_starts.len());
    for (i, (row, want)) in rows.iter().zip(expected_starts).enumerate() {
        match row {
            ScheduleRow::Trial {
                date: d,
                slot,
                start,
                end,
            } => {
                assert_eq!(*d, days[0]);
                assert_eq!(*slot, i as u32 + 1);
                assert_eq!(start.to_string(), want);
                assert_eq!(end.minutes() - start.minutes(), 75);
            }
            other => panic!("expected trial row, got {other:?}"),
        }
    }
}

#[test]
fn test_lunch_break_inserted_once() {
    // prep 0 so the cursor lands exactly on 12:00
    let config = ExperimentConfig {
        prep_time_min: 0,
        exclude_lunch: false,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&config, &days);

    let rows = generate(&config, &days, &windows).unwrap();
    let lunches: Vec<_> = rows
        .iter()
        .filter(|r| matches!(r, ScheduleRow::Lunch { .. }))
        .collect();
    assert_eq!(lunches.len(), 1);
    assert!(matches!(
        lunches[0],
        ScheduleRow::Lunch { start, end, .. }
            if start.to_string() == "12:00" && end.to_string() == "12:30"
    ));

    // lunch sits between the 11:00-12:00 and 12:30-13:30 trials
    assert!(matches!(rows[1],
        ScheduleRow::Trial { start, .. } if start.to_string() == "11:00"));
    assert!(matches!(rows[2], ScheduleRow::Lunch { .. }));
    assert!(matches!(rows[3],
        ScheduleRow::Trial { start, .. } if start.to_string() == "12:30"));

    // no trial span crosses the lunch window
    for row in &rows {
        if let ScheduleRow::Trial { start, end, .. } = row {
            assert!(
                end.minutes() <= 12 * 60 || start.minutes() >= 12 * 60 + 30,
                "trial {start}-{end} overlaps lunch"
            );
        }
    }
}

#[test]
fn test_excluded_lunch_never_triggers() {
    let config = ExperimentConfig {
        prep_time_min: 0,
        exclude_lunch: true,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let rows = generate(&config, &days, &default_windows(&config, &days)).unwrap();
    assert!(rows.iter().all(|r| !matches!(r, ScheduleRow::Lunch { .. })));
}

#[test]
fn test_lunch_outside_window_never_triggers() {
    let config = ExperimentConfig {
        exclude_lunch: false,
        lunch_start: time("07:00"),
        lunch_end: time("07:30"),
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let rows = generate(&config, &days, &default_windows(&config, &days)).unwrap();
    assert!(rows.iter().all(|r| !matches!(r, ScheduleRow::Lunch { .. })));
}

#[test]
fn test_separator_between_days_only() {
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01"), date("2024-01-02")];
    let windows = default_windows(&config, &days);

    let rows = generate(&config, &days, &windows).unwrap();
    let separators: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.is_separator().then_some(i))
        .collect();
    assert_eq!(separators.len(), 1);
    // six trials per day with the defaults, separator right after day one
    assert_eq!(separators[0], 6);
    assert!(!rows.last().unwrap().is_separator());
}

#[test]
fn test_slot_numbers_reset_per_day() {
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01"), date("2024-01-02")];
    let windows = default_windows(&config, &days);

    let rows = generate(&config, &days, &windows).unwrap();
    let mut per_day: HashMap<NaiveDate, Vec<u32>> = HashMap::new();
    for row in &rows {
        if let ScheduleRow::Trial { date, slot, .. } = row {
            per_day.entry(*date).or_default().push(*slot);
        }
    }
    for slots in per_day.values() {
        assert_eq!(*slots, (1..=slots.len() as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_window_too_small_yields_no_trials() {
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01"), date("2024-01-02")];
    let mut windows = default_windows(&config, &days);
    // 30-minute window cannot fit a 60-minute trial
    windows.insert(
        days[0],
        DayWindow {
            start: time("10:00"),
            end: time("10:30"),
        },
    );

    let rows = generate(&config, &days, &windows).unwrap();
    // day one contributes only the separator
    assert!(rows[0].is_separator());
    assert!(matches!(rows[1], ScheduleRow::Trial { date, .. } if date == days[1]));
}

#[test]
fn test_empty_day_list() {
    let config = ExperimentConfig::default();
    let rows = generate(&config, &[], &HashMap::new()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_zero_trial_length_fails_fast() {
    let config = ExperimentConfig {
        trial_length_min: 0,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&ExperimentConfig::default(), &days);
    assert_eq!(
        generate(&config, &days, &windows),
        Err(ScheduleError::NonPositiveTrialLength)
    );
}

#[test]
fn test_oversized_trial_length_fails_fast() {
    // a huge but representable trial length must error out, not wrap the
    // cursor arithmetic
    let config = ExperimentConfig {
        trial_length_min: u32::MAX,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&ExperimentConfig::default(), &days);
    assert_eq!(
        generate(&config, &days, &windows),
        Err(ScheduleError::TrialTooLong)
    );
}

#[test]
fn test_oversized_prep_time_fails_fast() {
    let config = ExperimentConfig {
        prep_time_min: u32::MAX,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&ExperimentConfig::default(), &days);
    assert_eq!(
        generate(&config, &days, &windows),
        Err(ScheduleError::PrepTooLong)
    );
}

#[test]
fn test_full_day_trial_length_is_accepted() {
    // exactly one day is the cap; window is too small so no rows, no error
    let config = ExperimentConfig {
        trial_length_min: 24 * 60,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let windows = default_windows(&ExperimentConfig::default(), &days);
    assert_eq!(generate(&config, &days, &windows), Ok(vec![]));
}

#[test]
fn test_missing_window_is_an_error() {
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01")];
    assert_eq!(
        generate(&config, &days, &HashMap::new()),
        Err(ScheduleError::MissingWindow(days[0]))
    );
}

#[test]
fn test_duplicate_days_kept_in_order() {
    let config = ExperimentConfig::default();
    let days = vec![date("2024-01-01"), date("2024-01-01")];
    let windows = default_windows(&config, &days);
    let rows = generate(&config, &days, &windows).unwrap();
    // both passes emitted, one separator between them
    assert_eq!(rows.iter().filter(|r| r.is_separator()).count(), 1);
    assert_eq!(
        rows.iter()
            .filter(|r| matches!(r, ScheduleRow::Trial { .. }))
            .count(),
        12
    );
}

#[test]
fn test_prep_overflow_past_window_end() {
    // trial fits but prep runs past the end of the window; the emitted end
    // time is still cursor + trial + prep
    let config = ExperimentConfig {
        trial_length_min: 60,
        prep_time_min: 30,
        ..Default::default()
    };
    let days = vec![date("2024-01-01")];
    let mut windows = HashMap::new();
    windows.insert(
        days[0],
        DayWindow {
            start: time("17:00"),
            end: time("18:00"),
        },
    );
    let rows = generate(&config, &days, &windows).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(matches!(rows[0],
        ScheduleRow::Trial { start, end, .. }
            if start.to_string() == "17:00" && end.to_string() == "18:30"));
}

proptest! {
    #[test]
    fn prop_generated_rows_well_formed(
        trial in 1u32..=120,
        prep in 0u32..=60,
        start_q in 0u32..60,       // quarter-hour index: 00:00..14:45
        span_q in 1u32..=36,       // window length, 15 min..9 h
        lunch_q in 0u32..90,
        lunch_len_q in 1u32..=6,
        exclude_lunch in any::<bool>(),
        day_count in 1usize..=3,
    ) {
        let config = ExperimentConfig {
            trial_length_min: trial,
            prep_time_min: prep,
            default_start: TimeOfDay::from_minutes(start_q * 15),
            default_end: TimeOfDay::from_minutes((start_q + span_q) * 15),
            exclude_lunch,
            lunch_start: TimeOfDay::from_minutes(lunch_q * 15),
            lunch_end: TimeOfDay::from_minutes((lunch_q + lunch_len_q) * 15),
        };
        let days: Vec<NaiveDate> = (1..=day_count as u32)
            .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
            .collect();
        let windows = default_windows(&config, &days);

        let rows = generate(&config, &days, &windows).unwrap();

        // exactly one separator between consecutive days
        prop_assert_eq!(
            rows.iter().filter(|r| r.is_separator()).count(),
            day_count - 1
        );
        // a trailing separator only ever precedes a day with no rows at all
        if let Some(ScheduleRow::Separator) = rows.last() {
            prop_assert!(config.default_start.minutes() + trial > config.default_end.minutes());
        }

        let window_start = config.default_start.minutes();
        let window_end = config.default_end.minutes();
        let mut prev_start: Option<u32> = None;
        let mut expected_slot = 1u32;
        for row in &rows {
            match row {
                ScheduleRow::Trial { slot, start, .. } => {
                    // every trial fits its window and starts after the previous one
                    prop_assert!(start.minutes() >= window_start);
                    prop_assert!(start.minutes() + trial <= window_end);
                    if let Some(prev) = prev_start {
                        prop_assert!(start.minutes() > prev);
                    }
                    prop_assert_eq!(*slot, expected_slot);
                    expected_slot += 1;
                    prev_start = Some(start.minutes());
                }
                ScheduleRow::Lunch { .. } => {
                    prop_assert!(!exclude_lunch);
                }
                ScheduleRow::Separator => {
                    prev_start = None;
                    expected_slot = 1;
                }
            }
        }
    }
}

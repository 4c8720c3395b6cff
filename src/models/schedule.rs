//! Schedule output rows.

use chrono::NaiveDate;

use super::time::TimeOfDay;

/// Spreadsheet column order: Date, Slot, Trial Start, Trial End.
pub const COLUMN_HEADERS: [&str; 4] = ["Date", "Slot", "Trial Start", "Trial End"];

/// One row of the generated timetable.
///
/// Rows are chronological within a day; a `Separator` sits between
/// consecutive days' blocks and never after the last day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleRow {
    /// A numbered trial slot spanning trial length plus prep time.
    Trial {
        date: NaiveDate,
        /// 1-based slot number, restarting at 1 each day.
        slot: u32,
        start: TimeOfDay,
        end: TimeOfDay,
    },
    /// The lunch break, spanning the configured lunch window.
    Lunch {
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    },
    /// Blank row between two days' blocks.
    Separator,
}

impl ScheduleRow {
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// Cell values in [`COLUMN_HEADERS`] order, as they appear in the export.
    pub fn cells(&self) -> [String; 4] {
        match self {
            Self::Trial {
                date,
                slot,
                start,
                end,
            } => [
                date.format("%Y-%m-%d").to_string(),
                slot.to_string(),
                start.to_string(),
                end.to_string(),
            ],
            Self::Lunch { date, start, end } => [
                date.format("%Y-%m-%d").to_string(),
                "Lunch".to_string(),
                start.to_string(),
                end.to_string(),
            ],
            Self::Separator => Default::default(),
        }
    }
}

//! Date-to-percentage layout for the Gantt axis.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// Milliseconds per day, the rounding unit of all span arithmetic.
const MS_PER_DAY: i128 = 86_400_000;

/// How many axis ticks the header renders; the rest are reported, not drawn.
pub const TICK_DISPLAY_LIMIT: usize = 12;

/// Months the rolling window reaches back from today.
const ROLLING_MONTHS_BACK: i32 = 3;
/// Months the rolling window reaches forward from today.
const ROLLING_MONTHS_AHEAD: i32 = 9;

/// Axis granularity toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Weeks,
    Quarters,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Weeks => "Haftalar",
            ViewMode::Quarters => "Çeyrekler",
        }
    }

    pub fn parse(value: &str) -> Option<ViewMode> {
        match value {
            "weeks" => Some(ViewMode::Weeks),
            "quarters" => Some(ViewMode::Quarters),
            _ => None,
        }
    }
}

/// Number of whole days from `from` to `to`, rounding any fraction up.
///
/// Defined as the ceiling of the millisecond span over 86,400,000; for
/// date-only inputs the span is always integral.
pub fn ceil_days(from: Date, to: Date) -> i64 {
    let ms = (to - from).whole_milliseconds();
    let quotient = ms.div_euclid(MS_PER_DAY);
    let days = if ms.rem_euclid(MS_PER_DAY) > 0 {
        quotient + 1
    } else {
        quotient
    };
    days as i64
}

/// Steps a date by whole calendar months, clamping the day of month.
///
/// Jan 31 plus one month lands on Feb 29/28; this differs from JS `setMonth`
/// overflow only for day 29..31 anchors.
fn shift_months(date: Date, delta: i32) -> Date {
    let zero_based = date.year() * 12 + (i32::from(u8::from(date.month())) - 1) + delta;
    let year = zero_based.div_euclid(12);
    let month = Month::try_from((zero_based.rem_euclid(12) + 1) as u8)
        .expect("month index is in 1..=12");
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).expect("clamped day fits the month")
}

/// Horizontal placement of one bar, in percent of the axis.
///
/// Unclamped on purpose: values may leave `0..=100` and the width is
/// negative when the range is inverted. That failure stays cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// The date range bounding the visible axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Date,
    pub end: Date,
}

impl TimeWindow {
    /// Window pinned to one project's own date range.
    pub fn for_project(project: &Project) -> Self {
        Self {
            start: project.start_date,
            end: project.end_date,
        }
    }

    /// Fixed heuristic window used when no project filter is active:
    /// three months back, nine months ahead of today. Not derived from the
    /// task set, so tasks outside it render out of bounds.
    pub fn rolling(today: Date) -> Self {
        Self {
            start: shift_months(today, -ROLLING_MONTHS_BACK),
            end: shift_months(today, ROLLING_MONTHS_AHEAD),
        }
    }

    pub fn total_days(&self) -> i64 {
        ceil_days(self.start, self.end)
    }

    /// Axis tick dates from the window start to its end, inclusive.
    ///
    /// Weeks mode steps 7 days; quarters mode steps 3 calendar months. The
    /// sequence is complete; callers apply [`TICK_DISPLAY_LIMIT`].
    pub fn ticks(&self, mode: ViewMode) -> Vec<Date> {
        let mut ticks = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            ticks.push(current);
            current = match mode {
                ViewMode::Weeks => current + Duration::days(7),
                ViewMode::Quarters => shift_months(current, 3),
            };
        }
        ticks
    }

    /// Percentage geometry for a bar spanning `start..end`.
    pub fn bar(&self, start: Date, end: Date) -> BarGeometry {
        let total = self.total_days() as f64;
        let offset = ceil_days(self.start, start) as f64;
        let span = ceil_days(start, end) as f64;
        BarGeometry {
            left_pct: offset / total * 100.0,
            width_pct: span / total * 100.0,
        }
    }
}

/// Header caption for one tick.
pub fn tick_label(date: Date, mode: ViewMode) -> String {
    match mode {
        ViewMode::Weeks => format!("{}/{}", date.day(), u8::from(date.month())),
        ViewMode::Quarters => {
            let quarter = (u8::from(date.month()) - 1) / 3 + 1;
            format!("Q{} {}", quarter, date.year())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_months, tick_label, ViewMode};
    use time::macros::date;

    #[test]
    fn month_shift_clamps_short_months() {
        assert_eq!(shift_months(date!(2024 - 01 - 31), 1), date!(2024 - 02 - 29));
        assert_eq!(shift_months(date!(2024 - 03 - 31), 3), date!(2024 - 06 - 30));
        assert_eq!(shift_months(date!(2024 - 01 - 31), -3), date!(2023 - 10 - 31));
    }

    #[test]
    fn month_shift_crosses_year_boundaries() {
        assert_eq!(shift_months(date!(2024 - 11 - 15), 3), date!(2025 - 02 - 15));
        assert_eq!(shift_months(date!(2024 - 02 - 01), -3), date!(2023 - 11 - 01));
    }

    #[test]
    fn tick_labels_follow_view_mode() {
        assert_eq!(tick_label(date!(2024 - 01 - 15), ViewMode::Weeks), "15/1");
        assert_eq!(tick_label(date!(2024 - 10 - 01), ViewMode::Quarters), "Q4 2024");
    }
}

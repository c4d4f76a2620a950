use partgate_core::{ceil_days, TimeWindow, ViewMode};
use time::macros::date;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn task_inside_window_stays_within_bounds() {
    let window = TimeWindow {
        start: date!(2024 - 01 - 01),
        end: date!(2024 - 12 - 31),
    };
    let bar = window.bar(date!(2024 - 03 - 01), date!(2024 - 05 - 01));

    assert!(bar.left_pct >= 0.0);
    assert!(bar.width_pct >= 0.0);
    assert!(bar.left_pct + bar.width_pct <= 100.0);
}

#[test]
fn task_starting_at_window_start_has_zero_offset() {
    let window = TimeWindow {
        start: date!(2024 - 01 - 15),
        end: date!(2024 - 08 - 30),
    };
    let bar = window.bar(date!(2024 - 01 - 15), date!(2024 - 02 - 15));
    assert_close(bar.left_pct, 0.0);
}

#[test]
fn task_spanning_the_window_fills_it() {
    let window = TimeWindow {
        start: date!(2024 - 02 - 01),
        end: date!(2024 - 10 - 15),
    };
    let bar = window.bar(date!(2024 - 02 - 01), date!(2024 - 10 - 15));
    assert_close(bar.left_pct, 0.0);
    assert_close(bar.width_pct, 100.0);
}

#[test]
fn quarter_ticks_step_three_calendar_months() {
    let window = TimeWindow {
        start: date!(2024 - 01 - 01),
        end: date!(2024 - 10 - 01),
    };
    assert_eq!(
        window.ticks(ViewMode::Quarters),
        vec![
            date!(2024 - 01 - 01),
            date!(2024 - 04 - 01),
            date!(2024 - 07 - 01),
            date!(2024 - 10 - 01),
        ]
    );
}

#[test]
fn week_ticks_over_fourteen_days_include_both_edges() {
    let window = TimeWindow {
        start: date!(2024 - 03 - 01),
        end: date!(2024 - 03 - 15),
    };
    let ticks = window.ticks(ViewMode::Weeks);
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[0], date!(2024 - 03 - 01));
    assert_eq!(ticks[1], date!(2024 - 03 - 08));
    assert_eq!(ticks[2], date!(2024 - 03 - 15));
}

#[test]
fn brake_system_design_task_lands_where_the_source_put_it() {
    // Project window 2024-01-15..2024-08-30 is 228 days; the CAD design
    // bar starts 32 days in and spans 59 days.
    let window = TimeWindow {
        start: date!(2024 - 01 - 15),
        end: date!(2024 - 08 - 30),
    };
    assert_eq!(window.total_days(), 228);

    let bar = window.bar(date!(2024 - 02 - 16), date!(2024 - 04 - 15));
    assert_close(bar.left_pct, 32.0 / 228.0 * 100.0);
    assert_close(bar.width_pct, 59.0 / 228.0 * 100.0);
    assert!((bar.left_pct - 14.0).abs() < 1.0);
    assert!((bar.width_pct - 26.0).abs() < 1.0);
}

#[test]
fn inverted_range_yields_negative_width() {
    let window = TimeWindow {
        start: date!(2024 - 01 - 01),
        end: date!(2024 - 12 - 31),
    };
    let bar = window.bar(date!(2024 - 06 - 01), date!(2024 - 05 - 01));
    assert!(bar.width_pct < 0.0);
}

#[test]
fn out_of_window_task_is_left_unclamped() {
    let window = TimeWindow {
        start: date!(2024 - 06 - 01),
        end: date!(2024 - 07 - 01),
    };
    let before = window.bar(date!(2024 - 05 - 01), date!(2024 - 05 - 15));
    assert!(before.left_pct < 0.0);

    let after = window.bar(date!(2024 - 08 - 01), date!(2024 - 09 - 01));
    assert!(after.left_pct + after.width_pct > 100.0);
}

#[test]
fn rolling_window_reaches_three_months_back_and_nine_ahead() {
    let window = TimeWindow::rolling(date!(2024 - 03 - 10));
    assert_eq!(window.start, date!(2023 - 12 - 10));
    assert_eq!(window.end, date!(2024 - 12 - 10));
}

#[test]
fn ceil_days_counts_whole_days() {
    assert_eq!(ceil_days(date!(2024 - 01 - 15), date!(2024 - 02 - 16)), 32);
    assert_eq!(ceil_days(date!(2024 - 02 - 16), date!(2024 - 04 - 15)), 59);
    assert_eq!(ceil_days(date!(2024 - 01 - 01), date!(2024 - 01 - 01)), 0);
    assert_eq!(ceil_days(date!(2024 - 01 - 02), date!(2024 - 01 - 01)), -1);
}

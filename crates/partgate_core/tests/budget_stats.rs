use partgate_core::seed;
use partgate_core::stats::budget::{category_breakdown, donut_segments, summarize, variance_rows};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn summary_matches_the_seeded_brake_budget() {
    let budgets = seed::budgets();
    let summary = summarize(&budgets[0]);

    assert_eq!(summary.total_budget, 850_000);
    assert_eq!(summary.spent_amount, 382_500);
    assert_eq!(summary.remaining, 467_500);
    assert_close(summary.utilization_pct, 45.0);
}

#[test]
fn donut_offsets_are_running_prefix_sums() {
    let budgets = seed::budgets();
    let segments = donut_segments(&budgets[0]);

    assert_eq!(segments.len(), 4);
    assert_close(segments[0].offset_pct, 0.0);

    let mut running = 0.0;
    for segment in &segments {
        assert_close(segment.offset_pct, running);
        running += segment.percentage;
    }
    // All category spending together is exactly the utilization share.
    assert_close(running, 45.0);
}

#[test]
fn variance_is_spent_minus_budgeted() {
    let budgets = seed::budgets();
    let rows = variance_rows(&budgets[0]);

    let engineering = rows.iter().find(|row| row.category == "Mühendislik").unwrap();
    assert_eq!(engineering.budgeted, 250_000);
    assert_eq!(engineering.spent, 112_500);
    assert_eq!(engineering.variance, -137_500);

    assert!(rows.iter().all(|row| row.variance == row.spent - row.budgeted));
}

#[test]
fn subcategory_shares_sum_to_the_category() {
    let budgets = seed::budgets();
    let material = &budgets[0].categories[1];
    let shares = category_breakdown(material);

    assert_eq!(shares.len(), 3);
    let total_pct: f64 = shares.iter().map(|share| share.pct_of_category).sum();
    assert_close(total_pct, 100.0);

    let spent_sum: i64 = shares.iter().map(|share| share.spent).sum();
    assert_eq!(spent_sum, material.spent_amount);
}

#[test]
fn zero_total_budget_degrades_to_zero_percentages() {
    let mut budget = seed::budgets().remove(0);
    budget.total_budget = 0;
    budget.spent_amount = 0;

    assert_close(summarize(&budget).utilization_pct, 0.0);
    assert!(donut_segments(&budget)
        .iter()
        .all(|segment| segment.percentage == 0.0));
}

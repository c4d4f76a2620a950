use partgate_core::{classify_gate, phase_segments, PhaseGate, PhaseId, PhasePlan, PhaseStatus};
use time::macros::date;
use time::Duration;

fn gate(completed: bool, due_date: time::Date) -> PhaseGate {
    PhaseGate {
        name: "Tasarım".to_string(),
        completed,
        due_date,
    }
}

#[test]
fn completed_gate_wins_regardless_of_due_date() {
    let today = date!(2024 - 03 - 10);
    let long_overdue = gate(true, today - Duration::days(90));
    assert_eq!(classify_gate(&long_overdue, today), PhaseStatus::Completed);
}

#[test]
fn open_gate_classification_follows_the_due_distance() {
    let today = date!(2024 - 03 - 10);

    let yesterday = gate(false, today - Duration::days(1));
    assert_eq!(classify_gate(&yesterday, today), PhaseStatus::Overdue);

    let in_three_days = gate(false, today + Duration::days(3));
    assert_eq!(classify_gate(&in_three_days, today), PhaseStatus::Warning);

    let in_a_month = gate(false, today + Duration::days(30));
    assert_eq!(classify_gate(&in_a_month, today), PhaseStatus::Normal);
}

#[test]
fn due_today_counts_as_warning_not_overdue() {
    let today = date!(2024 - 03 - 10);
    assert_eq!(classify_gate(&gate(false, today), today), PhaseStatus::Warning);
}

#[test]
fn warning_window_edge_sits_at_seven_days() {
    let today = date!(2024 - 03 - 10);
    let on_edge = gate(false, today + Duration::days(7));
    assert_eq!(classify_gate(&on_edge, today), PhaseStatus::Warning);

    let past_edge = gate(false, today + Duration::days(8));
    assert_eq!(classify_gate(&past_edge, today), PhaseStatus::Normal);
}

#[test]
fn segments_split_the_bar_evenly_in_apqp_order() {
    let plan = PhasePlan::new(
        PhaseId::Design,
        [
            (PhaseId::Concept, true, date!(2024 - 02 - 01)),
            (PhaseId::Design, false, date!(2024 - 04 - 15)),
            (PhaseId::Proto, false, date!(2024 - 06 - 01)),
            (PhaseId::Validation, false, date!(2024 - 07 - 15)),
            (PhaseId::Sop, false, date!(2024 - 08 - 30)),
        ],
    );

    let segments = phase_segments(&plan, date!(2024 - 03 - 10));
    assert_eq!(segments.len(), 5);
    for (index, segment) in segments.iter().enumerate() {
        assert!((segment.width_pct - 20.0).abs() < 1e-9);
        assert!((segment.left_pct - index as f64 * 20.0).abs() < 1e-9);
    }
    assert_eq!(
        segments.iter().map(|s| s.phase).collect::<Vec<_>>(),
        PhaseId::ALL
    );

    // Concept completed, design due in 36 days, nothing else closer.
    assert_eq!(segments[0].status, PhaseStatus::Completed);
    assert_eq!(segments[1].status, PhaseStatus::Normal);
}

#[test]
fn seeded_brake_project_statuses_on_a_fixed_day() {
    let projects = partgate_core::seed::projects();
    let brake = &projects[0];

    // 2024-04-12: design gate due in 3 days, proto due in 50.
    let segments = phase_segments(&brake.phase_plan, date!(2024 - 04 - 12));
    assert_eq!(segments[0].status, PhaseStatus::Completed);
    assert_eq!(segments[1].status, PhaseStatus::Warning);
    assert_eq!(segments[2].status, PhaseStatus::Normal);
}

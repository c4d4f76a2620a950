use partgate_core::model::phase::PhaseId;
use partgate_core::repo::schedule_repo::ScheduleRepository;
use partgate_core::seed;
use partgate_core::service::schedule_service::{GanttTaskDraft, ScheduleError, ScheduleService};
use partgate_core::{ViewMode, TICK_DISPLAY_LIMIT};
use time::macros::date;

fn draft(name: &str) -> GanttTaskDraft {
    GanttTaskDraft {
        name: name.to_string(),
        start_date: date!(2024 - 05 - 01),
        end_date: date!(2024 - 06 - 01),
        assignee: "Elif Demir".to_string(),
        phase: PhaseId::Design,
    }
}

#[test]
fn added_entry_gets_chart_defaults() {
    let mut repo = ScheduleRepository::new();
    let id = ScheduleService::new(&mut repo)
        .add_task(draft("Kalıp Tasarımı"), seed::PROJECT_BRAKE_SYSTEM)
        .unwrap();

    let task = repo.get(id).unwrap();
    assert_eq!(task.progress, 0);
    assert!(task.dependencies.is_empty());
    assert_eq!(task.project_id, seed::PROJECT_BRAKE_SYSTEM);
}

#[test]
fn blank_name_is_rejected() {
    let mut repo = ScheduleRepository::new();
    let err = ScheduleService::new(&mut repo)
        .add_task(draft("   "), seed::PROJECT_BRAKE_SYSTEM)
        .unwrap_err();
    assert_eq!(err, ScheduleError::MissingField("name"));
}

#[test]
fn progress_updates_clamp_at_one_hundred() {
    let mut repo = ScheduleRepository::from_rows(seed::gantt_tasks());
    let id = repo.all()[3].id;
    let mut service = ScheduleService::new(&mut repo);

    service.set_progress(id, 250).unwrap();
    assert_eq!(repo.get(id).unwrap().progress, 100);
}

#[test]
fn project_filter_selects_the_project_window_and_rows() {
    let mut repo = ScheduleRepository::from_rows(seed::gantt_tasks());
    let projects = seed::projects();
    let service = ScheduleService::new(&mut repo);

    let layout = service.layout(Some(&projects[0]), ViewMode::Weeks, date!(2024 - 03 - 10));
    assert_eq!(layout.window.start, projects[0].start_date);
    assert_eq!(layout.window.end, projects[0].end_date);
    assert_eq!(layout.rows.len(), 4);

    // 228-day window yields 33 weekly ticks; the header keeps 12.
    assert_eq!(layout.ticks.len(), TICK_DISPLAY_LIMIT);
    assert_eq!(layout.hidden_ticks, 33 - TICK_DISPLAY_LIMIT);

    let body_panel = service.layout(Some(&projects[1]), ViewMode::Weeks, date!(2024 - 03 - 10));
    assert!(body_panel.rows.is_empty());
}

#[test]
fn all_projects_view_uses_the_rolling_window() {
    let mut repo = ScheduleRepository::from_rows(seed::gantt_tasks());
    let service = ScheduleService::new(&mut repo);
    let today = date!(2024 - 03 - 10);

    let layout = service.layout(None, ViewMode::Quarters, today);
    assert_eq!(layout.window.start, date!(2023 - 12 - 10));
    assert_eq!(layout.window.end, date!(2024 - 12 - 10));
    assert_eq!(layout.rows.len(), 4);
    // One-year window in quarters: 5 ticks, nothing hidden.
    assert_eq!(layout.ticks.len(), 5);
    assert_eq!(layout.hidden_ticks, 0);
}

#[test]
fn completed_concept_bar_spans_its_dates() {
    let mut repo = ScheduleRepository::from_rows(seed::gantt_tasks());
    let projects = seed::projects();
    let service = ScheduleService::new(&mut repo);

    let layout = service.layout(Some(&projects[0]), ViewMode::Weeks, date!(2024 - 03 - 10));
    let concept = layout
        .rows
        .iter()
        .find(|row| row.task.name == "Konsept Geliştirme")
        .unwrap();

    assert!((concept.bar.left_pct - 0.0).abs() < 1e-9);
    assert!((concept.bar.width_pct - (31.0 / 228.0 * 100.0)).abs() < 1e-9);
    assert_eq!(concept.task.progress, 100);
}

#[test]
fn removal_and_rename_target_single_rows() {
    let mut repo = ScheduleRepository::from_rows(seed::gantt_tasks());
    let first = repo.all()[0].id;
    let second = repo.all()[1].id;
    let mut service = ScheduleService::new(&mut repo);

    service.rename(second, "CAD Revizyon").unwrap();
    service.remove(first).unwrap();

    assert_eq!(repo.all().len(), 3);
    assert_eq!(repo.get(second).unwrap().name, "CAD Revizyon");
    assert!(repo.get(first).is_none());
}

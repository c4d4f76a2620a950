use partgate_core::model::project::ProjectStatus;
use partgate_core::model::quality::QualityKind;
use partgate_core::model::task::TaskStatus;
use partgate_core::{seed, Workspace};
use serde_json::json;

#[test]
fn seeded_workspace_carries_the_demo_rows() {
    let workspace = Workspace::seeded();

    assert_eq!(workspace.projects.len(), 2);
    assert_eq!(workspace.tasks.len(), 3);
    assert_eq!(workspace.schedule.all().len(), 4);
    assert_eq!(workspace.budgets.all().len(), 1);
    assert_eq!(workspace.quality.all().len(), 2);
    assert_eq!(workspace.inventory.all().len(), 2);
    assert_eq!(workspace.equipment.all().len(), 2);
    assert_eq!(workspace.documents.all().len(), 2);
    assert_eq!(workspace.changes.all().len(), 2);
    assert_eq!(workspace.notifications.all().len(), 5);
    assert_eq!(workspace.escalation.rules().len(), 2);
    assert_eq!(workspace.escalation.delayed_actions().len(), 2);
    assert_eq!(workspace.escalation.history().len(), 2);
}

#[test]
fn every_seeded_project_reference_resolves() {
    let workspace = Workspace::seeded();
    let exists = |id| workspace.projects.get(id).is_some();

    assert!(workspace.tasks.all().iter().all(|task| exists(task.project_id)));
    assert!(workspace.schedule.all().iter().all(|task| exists(task.project_id)));
    assert!(workspace.budgets.all().iter().all(|budget| exists(budget.project_id)));
    assert!(workspace.quality.all().iter().all(|rec| exists(rec.project_id)));
    assert!(workspace.equipment.all().iter().all(|eq| exists(eq.project_id)));
    assert!(workspace.documents.all().iter().all(|doc| exists(doc.project_id)));
    assert!(workspace.changes.all().iter().all(|req| exists(req.project_id)));
}

#[test]
fn gantt_dependencies_point_at_seeded_entries() {
    let tasks = seed::gantt_tasks();
    for task in &tasks {
        for dependency in &task.dependencies {
            assert!(
                tasks.iter().any(|other| other.id == *dependency),
                "dangling dependency on {}",
                task.name
            );
        }
    }
}

#[test]
fn seeded_budget_rollup_is_consistent() {
    let budgets = seed::budgets();
    let budget = &budgets[0];

    let category_spend: i64 = budget.categories.iter().map(|c| c.spent_amount).sum();
    assert_eq!(category_spend, budget.spent_amount);

    for category in &budget.categories {
        let sub_spend: i64 = category.subcategories.iter().map(|s| s.spent_amount).sum();
        assert_eq!(sub_spend, category.spent_amount, "category {}", category.name);
    }
}

#[test]
fn enum_wire_spellings_match_the_original_strings() {
    assert_eq!(
        serde_json::to_value(TaskStatus::InProgress).unwrap(),
        json!("in-progress")
    );
    assert_eq!(
        serde_json::to_value(ProjectStatus::AfterSales).unwrap(),
        json!("after-sales")
    );
    assert_eq!(serde_json::to_value(QualityKind::EightD).unwrap(), json!("8d"));
    assert_eq!(
        serde_json::to_value(QualityKind::NonConformance).unwrap(),
        json!("non-conformance")
    );

    let parsed: TaskStatus = serde_json::from_value(json!("in-progress")).unwrap();
    assert_eq!(parsed, TaskStatus::InProgress);
}

#[test]
fn projects_round_trip_through_serde() {
    let projects = seed::projects();
    let encoded = serde_json::to_string(&projects).unwrap();
    let decoded: Vec<partgate_core::Project> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, projects);
}

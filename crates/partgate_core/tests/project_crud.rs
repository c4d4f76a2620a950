use partgate_core::model::common::Priority;
use partgate_core::model::phase::PhaseId;
use partgate_core::model::project::{ProjectStatus, ProjectValidationError};
use partgate_core::repo::project_repo::{ProjectQuery, ProjectRepoError, ProjectRepository};
use partgate_core::service::project_service::{NewProject, ProjectService};
use time::macros::date;

fn draft(name: &str, customer: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        customer: customer.to_string(),
        start_date: date!(2024 - 05 - 01),
        end_date: date!(2025 - 02 - 01),
        status: ProjectStatus::Concept,
        priority: Priority::Medium,
    }
}

#[test]
fn created_project_shows_up_with_form_defaults() {
    let mut repo = ProjectRepository::new();
    let mut service = ProjectService::new(&mut repo);

    let id = service.create(draft("Audi Q7 Süspansiyon", "Audi AG")).unwrap();
    let project = repo.get(id).unwrap();

    assert_eq!(project.progress, 0);
    assert!(project.team.is_empty());
    assert_eq!(project.phase_plan.current, PhaseId::Concept);
    assert_eq!(project.phase_plan.gate_count(), 5);
    assert_eq!(project.phase_plan.completed_count(), 0);
    assert_eq!(
        project.phase_plan.gate(PhaseId::Sop).unwrap().due_date,
        date!(2025 - 02 - 01)
    );
}

#[test]
fn blank_required_fields_are_rejected() {
    let mut repo = ProjectRepository::new();
    let mut service = ProjectService::new(&mut repo);

    let err = service.create(draft("  ", "Audi AG")).unwrap_err();
    assert!(matches!(
        err,
        ProjectRepoError::Validation(ProjectValidationError::BlankName)
    ));

    let err = service.create(draft("Audi Q7", "")).unwrap_err();
    assert!(matches!(
        err,
        ProjectRepoError::Validation(ProjectValidationError::BlankCustomer)
    ));

    assert!(repo.is_empty());
}

#[test]
fn inverted_date_range_is_rejected() {
    let mut repo = ProjectRepository::new();
    let mut service = ProjectService::new(&mut repo);

    let mut bad = draft("Audi Q7", "Audi AG");
    bad.start_date = date!(2025 - 02 - 01);
    bad.end_date = date!(2024 - 05 - 01);

    let err = service.create(bad).unwrap_err();
    assert!(matches!(
        err,
        ProjectRepoError::Validation(ProjectValidationError::DateRangeInverted)
    ));
}

#[test]
fn invalid_update_leaves_the_stored_row_untouched() {
    let mut repo = ProjectRepository::new();
    let id = ProjectService::new(&mut repo)
        .create(draft("Audi Q7", "Audi AG"))
        .unwrap();

    let err = repo.update(id, |project| project.name.clear()).unwrap_err();
    assert!(matches!(err, ProjectRepoError::Validation(_)));
    assert_eq!(repo.get(id).unwrap().name, "Audi Q7");
}

#[test]
fn list_filters_combine_search_status_and_priority() {
    let mut repo = ProjectRepository::from_rows(partgate_core::seed::projects());
    {
        let mut service = ProjectService::new(&mut repo);
        let mut extra = draft("Volvo FH Kabin", "Volvo Trucks");
        extra.status = ProjectStatus::Validation;
        extra.priority = Priority::Low;
        service.create(extra).unwrap();
    }

    let by_search = repo.list(&ProjectQuery {
        search: Some("fren".to_string()),
        ..ProjectQuery::default()
    });
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].name, "BMW X5 Fren Sistemi");

    let by_customer_search = repo.list(&ProjectQuery {
        search: Some("mercedes".to_string()),
        ..ProjectQuery::default()
    });
    assert_eq!(by_customer_search.len(), 1);

    let by_status = repo.list(&ProjectQuery {
        status: Some(ProjectStatus::Validation),
        ..ProjectQuery::default()
    });
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].name, "Volvo FH Kabin");

    let combined = repo.list(&ProjectQuery {
        search: Some("volvo".to_string()),
        status: Some(ProjectStatus::Validation),
        priority: Some(Priority::Low),
    });
    assert_eq!(combined.len(), 1);

    let nothing = repo.list(&ProjectQuery {
        search: Some("volvo".to_string()),
        status: Some(ProjectStatus::Sop),
        priority: None,
    });
    assert!(nothing.is_empty());
}

#[test]
fn delete_removes_the_row() {
    let mut repo = ProjectRepository::from_rows(partgate_core::seed::projects());
    let id = repo.all()[0].id;

    ProjectService::new(&mut repo).delete(id).unwrap();
    assert_eq!(repo.len(), 1);
    assert!(repo.get(id).is_none());

    let err = ProjectService::new(&mut repo).delete(id).unwrap_err();
    assert!(matches!(err, ProjectRepoError::NotFound(missing) if missing == id));
}

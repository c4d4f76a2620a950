use partgate_core::model::change::ChangeRequestStatus;
use partgate_core::model::common::Priority;
use partgate_core::repo::change_repo::{ChangeRequestQuery, ChangeRequestRepository};
use partgate_core::seed;
use partgate_core::service::change_service::{
    ChangeRequestService, ChangeServiceError, NewChangeRequest,
};
use partgate_core::stats::records::change_request_stats;
use time::macros::date;

fn draft() -> NewChangeRequest {
    NewChangeRequest {
        title: "Yüzey Kaplama Değişikliği".to_string(),
        description: "Korozyon dayanımı için kaplama tipi değişmeli".to_string(),
        project_id: seed::PROJECT_BRAKE_SYSTEM,
        priority: Priority::Medium,
        impact_cost: 8_000,
        impact_timeline_days: 5,
        impact_scope: "Kaplama prosesi".to_string(),
    }
}

#[test]
fn submitted_request_starts_pending_without_approval_stamps() {
    let mut repo = ChangeRequestRepository::new();
    let id = ChangeRequestService::new(&mut repo)
        .submit(draft(), "Admin User", date!(2024 - 03 - 25))
        .unwrap();

    let request = repo.get(id).unwrap();
    assert_eq!(request.status, ChangeRequestStatus::Pending);
    assert_eq!(request.requested_by, "Admin User");
    assert_eq!(request.request_date, date!(2024 - 03 - 25));
    assert!(request.approved_by.is_none());
    assert!(request.approval_date.is_none());
    assert!(request.comments.is_empty());
}

#[test]
fn blank_title_or_description_is_rejected() {
    let mut repo = ChangeRequestRepository::new();
    let mut service = ChangeRequestService::new(&mut repo);

    let mut no_title = draft();
    no_title.title = " ".to_string();
    assert_eq!(
        service.submit(no_title, "Admin User", date!(2024 - 03 - 25)),
        Err(ChangeServiceError::MissingField("title"))
    );

    let mut no_description = draft();
    no_description.description = String::new();
    assert_eq!(
        service.submit(no_description, "Admin User", date!(2024 - 03 - 25)),
        Err(ChangeServiceError::MissingField("description"))
    );
}

#[test]
fn approval_stamps_the_approver_and_date() {
    let mut repo = ChangeRequestRepository::from_rows(seed::change_requests());
    let pending_id = repo.all()[0].id;

    ChangeRequestService::new(&mut repo)
        .approve(pending_id, "Fatma Şen", date!(2024 - 03 - 26))
        .unwrap();

    let request = repo.get(pending_id).unwrap();
    assert_eq!(request.status, ChangeRequestStatus::Approved);
    assert_eq!(request.approved_by.as_deref(), Some("Fatma Şen"));
    assert_eq!(request.approval_date, Some(date!(2024 - 03 - 26)));
}

#[test]
fn rejection_clears_any_earlier_approval() {
    let mut repo = ChangeRequestRepository::from_rows(seed::change_requests());
    let approved_id = repo.all()[1].id;

    ChangeRequestService::new(&mut repo).reject(approved_id).unwrap();

    let request = repo.get(approved_id).unwrap();
    assert_eq!(request.status, ChangeRequestStatus::Rejected);
    assert!(request.approved_by.is_none());
    assert!(request.approval_date.is_none());
}

#[test]
fn implementation_keeps_the_approval_trail() {
    let mut repo = ChangeRequestRepository::from_rows(seed::change_requests());
    let approved_id = repo.all()[1].id;

    ChangeRequestService::new(&mut repo)
        .mark_implemented(approved_id, date!(2024 - 04 - 02))
        .unwrap();

    let request = repo.get(approved_id).unwrap();
    assert_eq!(request.status, ChangeRequestStatus::Implemented);
    assert_eq!(request.approved_by.as_deref(), Some("Fatma Şen"));
    assert_eq!(request.implementation_date, Some(date!(2024 - 04 - 02)));
}

#[test]
fn stats_and_search_follow_the_list() {
    let repo = ChangeRequestRepository::from_rows(seed::change_requests());

    let stats = change_request_stats(repo.all());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.implemented, 0);

    let by_description = repo.list(&ChangeRequestQuery {
        search: Some("montaj hattı".to_string()),
        ..ChangeRequestQuery::default()
    });
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Kaporta Boyut Değişikliği");
}

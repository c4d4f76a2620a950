use partgate_core::model::common::Priority;
use partgate_core::model::task::TaskStatus;
use partgate_core::repo::task_repo::{TaskQuery, TaskRepository};
use partgate_core::seed;
use partgate_core::service::task_service::{NewTask, TaskService};
use time::macros::{date, datetime};

#[test]
fn search_matches_title_and_assignee_case_insensitively() {
    let repo = TaskRepository::from_rows(seed::tasks());

    let by_title = repo.list(&TaskQuery {
        search: Some("cad".to_string()),
        ..TaskQuery::default()
    });
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "CAD Tasarım Tamamlama");

    let by_assignee = repo.list(&TaskQuery {
        search: Some("mehmet".to_string()),
        ..TaskQuery::default()
    });
    assert_eq!(by_assignee.len(), 1);
    assert_eq!(by_assignee[0].assigned_to, "Mehmet Öz");
}

#[test]
fn board_groups_filtered_tasks_by_column() {
    let mut repo = TaskRepository::from_rows(seed::tasks());
    let service = TaskService::new(&mut repo);

    let board = service.board(&TaskQuery::default());
    assert_eq!(board.todo.len(), 1);
    assert_eq!(board.in_progress.len(), 1);
    assert_eq!(board.review.len(), 1);
    assert!(board.completed.is_empty());

    assert_eq!(board.column(TaskStatus::Review)[0].title, "PPAP Dokümanları Hazırlama");
}

#[test]
fn created_task_gets_board_defaults() {
    let mut repo = TaskRepository::new();
    let mut service = TaskService::new(&mut repo);
    let today = date!(2024 - 03 - 21);

    let id = service.create(
        NewTask {
            title: "Fikstür Onayı".to_string(),
            description: String::new(),
            project_id: seed::PROJECT_BODY_PANEL,
            assigned_to: "Ali Yılmaz".to_string(),
            priority: Priority::High,
            due_date: date!(2024 - 04 - 01),
            department: "Kalite".to_string(),
        },
        today,
    );

    let task = repo.get(id).unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.created_date, today);
    assert!(task.comments.is_empty());
    assert!(task.files.is_empty());
}

#[test]
fn status_moves_and_comments_land_on_the_right_task() {
    let mut repo = TaskRepository::from_rows(seed::tasks());
    let id = repo.all()[0].id;
    let mut service = TaskService::new(&mut repo);

    service.set_status(id, TaskStatus::Completed).unwrap();
    service
        .add_comment(id, "Ahmet Kaya", "Tamamlandı, teşekkürler.", datetime!(2024 - 03 - 22 08:30 UTC))
        .unwrap();

    let task = repo.get(id).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.comments.len(), 2);
    assert_eq!(task.comments[1].author, "Ahmet Kaya");
}

#[test]
fn project_filter_narrows_the_board() {
    let repo = TaskRepository::from_rows(seed::tasks());
    let brake_only = repo.list(&TaskQuery {
        project: Some(seed::PROJECT_BRAKE_SYSTEM),
        ..TaskQuery::default()
    });
    assert_eq!(brake_only.len(), 2);
    assert!(brake_only
        .iter()
        .all(|task| task.project_id == seed::PROJECT_BRAKE_SYSTEM));
}

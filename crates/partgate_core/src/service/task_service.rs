//! Task-board use-case service.

use crate::model::common::Priority;
use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskComment, TaskId, TaskStatus};
use crate::repo::task_repo::{TaskQuery, TaskRepository};
use crate::repo::RepoResult;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Input of the new-task form.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub project_id: ProjectId,
    pub assigned_to: String,
    pub priority: Priority,
    pub due_date: Date,
    pub department: String,
}

/// The four board columns, filtered and grouped in one pass.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub review: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TaskBoard {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Completed => &self.completed,
        }
    }
}

/// Facade over the task repository.
pub struct TaskService<'a> {
    repo: &'a mut TaskRepository,
}

impl<'a> TaskService<'a> {
    pub fn new(repo: &'a mut TaskRepository) -> Self {
        Self { repo }
    }

    /// Creates a task with board defaults: `todo`, created today.
    pub fn create(&mut self, draft: NewTask, today: Date) -> TaskId {
        self.repo.create(Task {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            project_id: draft.project_id,
            assigned_to: draft.assigned_to,
            status: TaskStatus::Todo,
            priority: draft.priority,
            due_date: draft.due_date,
            created_date: today,
            department: draft.department,
            files: Vec::new(),
            comments: Vec::new(),
        })
    }

    pub fn list(&self, query: &TaskQuery) -> Vec<&Task> {
        self.repo.list(query)
    }

    /// Groups the filtered tasks into their board columns.
    pub fn board(&self, query: &TaskQuery) -> TaskBoard {
        board_from(self.repo.list(query))
    }

    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> RepoResult<()> {
        self.repo.update(id, |task| task.status = status)
    }

    pub fn add_comment(
        &mut self,
        id: TaskId,
        author: impl Into<String>,
        content: impl Into<String>,
        at: OffsetDateTime,
    ) -> RepoResult<()> {
        let comment = TaskComment {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            timestamp: at,
        };
        self.repo.update(id, |task| task.comments.push(comment))
    }

    pub fn delete(&mut self, id: TaskId) -> RepoResult<Task> {
        self.repo.delete(id)
    }
}

/// Groups tasks into board columns; shared by the service and read-only
/// views that already hold a filtered list.
pub fn board_from<'t>(tasks: impl IntoIterator<Item = &'t Task>) -> TaskBoard {
    let mut board = TaskBoard::default();
    for task in tasks {
        let column = match task.status {
            TaskStatus::Todo => &mut board.todo,
            TaskStatus::InProgress => &mut board.in_progress,
            TaskStatus::Review => &mut board.review,
            TaskStatus::Completed => &mut board.completed,
        };
        column.push(task.clone());
    }
    board
}

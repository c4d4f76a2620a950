//! Work-item task entity for the kanban-style task board.

use crate::model::common::{Priority, Tone};
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Stable task identifier.
pub type TaskId = Uuid;

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "Yapılacak",
            TaskStatus::InProgress => "Devam Ediyor",
            TaskStatus::Review => "İnceleme",
            TaskStatus::Completed => "Tamamlandı",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "review" => Some(TaskStatus::Review),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TaskStatus::Todo => Tone::Gray,
            TaskStatus::InProgress => Tone::Blue,
            TaskStatus::Review => Tone::Yellow,
            TaskStatus::Completed => Tone::Green,
        }
    }
}

/// Discussion entry attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

/// One actionable work item, assigned to a person and a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub project_id: ProjectId,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Date,
    pub created_date: Date,
    pub department: String,
    pub files: Vec<String>,
    pub comments: Vec<TaskComment>,
}

impl Task {
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

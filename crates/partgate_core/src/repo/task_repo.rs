//! Task repository backing the task board.

use crate::model::common::Priority;
use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for Task {
    fn id(&self) -> TaskId {
        self.id
    }
}

/// Filter options for the task board.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Substring over title and assignee.
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project: Option<ProjectId>,
}

impl TaskQuery {
    fn matches(&self, task: &Task) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => {
                contains_ci(&task.title, term) || contains_ci(&task.assigned_to, term)
            }
            None => true,
        };
        search_ok
            && self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
            && self.project.map_or(true, |project| task.project_id == project)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskRepository {
    store: MemoryStore<Task>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Task>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, task: Task) -> TaskId {
        self.store.insert(task)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn update(&mut self, id: TaskId, apply: impl FnOnce(&mut Task)) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn delete(&mut self, id: TaskId) -> RepoResult<Task> {
        self.store.remove(id)
    }

    pub fn list(&self, query: &TaskQuery) -> Vec<&Task> {
        self.store.iter().filter(|task| query.matches(task)).collect()
    }

    pub fn all(&self) -> &[Task] {
        self.store.rows()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}

//! Gantt schedule-entry repository.

use crate::model::project::ProjectId;
use crate::model::schedule::{GanttTask, GanttTaskId};
use crate::repo::{Entity, MemoryStore, RepoResult};

impl Entity for GanttTask {
    fn id(&self) -> GanttTaskId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleRepository {
    store: MemoryStore<GanttTask>,
}

impl ScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<GanttTask>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, task: GanttTask) -> GanttTaskId {
        self.store.insert(task)
    }

    pub fn get(&self, id: GanttTaskId) -> Option<&GanttTask> {
        self.store.get(id)
    }

    pub fn update(
        &mut self,
        id: GanttTaskId,
        apply: impl FnOnce(&mut GanttTask),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn delete(&mut self, id: GanttTaskId) -> RepoResult<GanttTask> {
        self.store.remove(id)
    }

    /// Entries for one project, or every entry when `project` is `None`.
    pub fn list(&self, project: Option<ProjectId>) -> Vec<&GanttTask> {
        self.store
            .iter()
            .filter(|task| project.map_or(true, |id| task.project_id == id))
            .collect()
    }

    pub fn all(&self) -> &[GanttTask] {
        self.store.rows()
    }
}

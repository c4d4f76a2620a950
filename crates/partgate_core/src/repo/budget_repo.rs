//! Budget repository; one row per project.

use crate::model::budget::{Budget, BudgetId};
use crate::model::project::ProjectId;
use crate::repo::{Entity, MemoryStore, RepoResult};

impl Entity for Budget {
    fn id(&self) -> BudgetId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetRepository {
    store: MemoryStore<Budget>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Budget>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, budget: Budget) -> BudgetId {
        self.store.insert(budget)
    }

    /// The budget selector on the finance view keys by project.
    pub fn for_project(&self, project_id: ProjectId) -> Option<&Budget> {
        self.store.iter().find(|budget| budget.project_id == project_id)
    }

    pub fn update(
        &mut self,
        id: BudgetId,
        apply: impl FnOnce(&mut Budget),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn all(&self) -> &[Budget] {
        self.store.rows()
    }
}

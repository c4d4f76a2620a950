//! Change-request repository.

use crate::model::change::{ChangeRequest, ChangeRequestId, ChangeRequestStatus};
use crate::model::project::ProjectId;
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for ChangeRequest {
    fn id(&self) -> ChangeRequestId {
        self.id
    }
}

/// Filter options for the change-request list.
#[derive(Debug, Clone, Default)]
pub struct ChangeRequestQuery {
    /// Substring over title and description.
    pub search: Option<String>,
    pub status: Option<ChangeRequestStatus>,
    pub project: Option<ProjectId>,
}

impl ChangeRequestQuery {
    fn matches(&self, request: &ChangeRequest) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => {
                contains_ci(&request.title, term) || contains_ci(&request.description, term)
            }
            None => true,
        };
        search_ok
            && self.status.map_or(true, |status| request.status == status)
            && self.project.map_or(true, |id| request.project_id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChangeRequestRepository {
    store: MemoryStore<ChangeRequest>,
}

impl ChangeRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<ChangeRequest>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, request: ChangeRequest) -> ChangeRequestId {
        self.store.insert(request)
    }

    pub fn get(&self, id: ChangeRequestId) -> Option<&ChangeRequest> {
        self.store.get(id)
    }

    pub fn update(
        &mut self,
        id: ChangeRequestId,
        apply: impl FnOnce(&mut ChangeRequest),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn list(&self, query: &ChangeRequestQuery) -> Vec<&ChangeRequest> {
        self.store
            .iter()
            .filter(|request| query.matches(request))
            .collect()
    }

    pub fn all(&self) -> &[ChangeRequest] {
        self.store.rows()
    }
}

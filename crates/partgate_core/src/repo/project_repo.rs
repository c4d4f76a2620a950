//! Project repository with validated write paths.
//!
//! # Invariants
//! - `Project::validate` gates every create and update.
//! - List order is insertion order (seeded rows first, added rows last).

use crate::model::common::Priority;
use crate::model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
use crate::repo::{contains_ci, Entity, MemoryStore, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

impl Entity for Project {
    fn id(&self) -> ProjectId {
        self.id
    }
}

/// Error from project write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRepoError {
    Validation(ProjectValidationError),
    NotFound(ProjectId),
}

impl Display for ProjectRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for ProjectRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ProjectValidationError> for ProjectRepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ProjectRepoError {
    fn from(value: RepoError) -> Self {
        let RepoError::NotFound(id) = value;
        Self::NotFound(id)
    }
}

/// Filter options for the project list view.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Substring over name and customer.
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
}

impl ProjectQuery {
    fn matches(&self, project: &Project) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => {
                contains_ci(&project.name, term) || contains_ci(&project.customer, term)
            }
            None => true,
        };
        search_ok
            && self.status.map_or(true, |status| project.status == status)
            && self
                .priority
                .map_or(true, |priority| project.priority == priority)
    }
}

/// In-memory project store.
#[derive(Debug, Clone, Default)]
pub struct ProjectRepository {
    store: MemoryStore<Project>,
}

impl ProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Project>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, project: Project) -> Result<ProjectId, ProjectRepoError> {
        project.validate()?;
        Ok(self.store.insert(project))
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.store.get(id)
    }

    /// Applies an edit on a copy and stores it only when still valid.
    pub fn update(
        &mut self,
        id: ProjectId,
        apply: impl FnOnce(&mut Project),
    ) -> Result<(), ProjectRepoError> {
        let mut updated = self
            .store
            .get(id)
            .cloned()
            .ok_or(ProjectRepoError::NotFound(id))?;
        apply(&mut updated);
        updated.validate()?;
        self.store.update(id, |row| *row = updated)?;
        Ok(())
    }

    pub fn delete(&mut self, id: ProjectId) -> Result<Project, ProjectRepoError> {
        Ok(self.store.remove(id)?)
    }

    pub fn list(&self, query: &ProjectQuery) -> Vec<&Project> {
        self.store
            .iter()
            .filter(|project| query.matches(project))
            .collect()
    }

    pub fn all(&self) -> &[Project] {
        self.store.rows()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

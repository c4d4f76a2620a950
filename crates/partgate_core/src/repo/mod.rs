//! In-memory repositories over the seeded mock data.
//!
//! # Responsibility
//! - Provide stable CRUD APIs per entity on top of one generic store.
//! - Host the view-layer filter queries (search term plus categorical
//!   equality filters) recomputed over the full snapshot on every call.
//!
//! # Invariants
//! - Storage is a plain ordered `Vec`; nothing is indexed, cached or
//!   persisted, and deletes are hard removals.
//! - Write paths that carry validation rules run them before mutating.

pub mod budget_repo;
pub mod change_repo;
pub mod document_repo;
pub mod equipment_repo;
pub mod escalation_repo;
pub mod inventory_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod quality_repo;
pub mod schedule_repo;
pub mod task_repo;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Result type for plain store operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repositories without entity-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    /// No row carries the given id.
    NotFound(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Anything addressable by a stable id inside a [`MemoryStore`].
pub trait Entity {
    fn id(&self) -> Uuid;
}

/// Ordered in-memory store; the single storage seam of the system.
///
/// Insertion order is display order: seeded rows come first and added rows
/// append at the end.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_rows(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Appends one row and returns its id.
    pub fn insert(&mut self, item: T) -> Uuid {
        let id = item.id();
        self.items.push(item);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Applies `apply` to the row with the given id.
    pub fn update(&mut self, id: Uuid, apply: impl FnOnce(&mut T)) -> RepoResult<()> {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                Ok(())
            }
            None => Err(RepoError::NotFound(id)),
        }
    }

    /// Removes and returns the row with the given id.
    pub fn remove(&mut self, id: Uuid) -> RepoResult<T> {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(RepoError::NotFound(id)),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn rows(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Case-insensitive substring check used by every search filter.
///
/// Folding is Unicode-simple; the Turkish dotted/dotless I pairs are not
/// special-cased.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{contains_ci, Entity, MemoryStore, RepoError};
    use uuid::Uuid;

    #[derive(Debug)]
    struct Row {
        id: Uuid,
        value: u32,
    }

    impl Entity for Row {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn insert_preserves_order_and_update_targets_by_id() {
        let mut store = MemoryStore::new();
        let first = store.insert(Row {
            id: Uuid::from_u128(1),
            value: 10,
        });
        let second = store.insert(Row {
            id: Uuid::from_u128(2),
            value: 20,
        });

        store.update(second, |row| row.value = 25).unwrap();

        let values: Vec<u32> = store.iter().map(|row| row.value).collect();
        assert_eq!(values, vec![10, 25]);
        assert_eq!(store.get(first).unwrap().value, 10);
    }

    #[test]
    fn remove_missing_row_reports_not_found() {
        let mut store: MemoryStore<Row> = MemoryStore::new();
        let missing = Uuid::from_u128(9);
        assert_eq!(store.remove(missing).unwrap_err(), RepoError::NotFound(missing));
    }

    #[test]
    fn substring_match_ignores_ascii_case() {
        assert!(contains_ci("BMW X5 Fren Sistemi", "fren"));
        assert!(!contains_ci("BMW X5 Fren Sistemi", "kaporta"));
    }
}

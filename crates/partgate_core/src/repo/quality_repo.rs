//! Quality-record repository.

use crate::model::quality::{QualityKind, QualityRecord, QualityRecordId, QualityStatus};
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for QualityRecord {
    fn id(&self) -> QualityRecordId {
        self.id
    }
}

/// Filter options for the quality view.
#[derive(Debug, Clone, Default)]
pub struct QualityQuery {
    /// Substring over the record title.
    pub search: Option<String>,
    pub kind: Option<QualityKind>,
    pub status: Option<QualityStatus>,
}

impl QualityQuery {
    fn matches(&self, record: &QualityRecord) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => contains_ci(&record.title, term),
            None => true,
        };
        search_ok
            && self.kind.map_or(true, |kind| record.kind == kind)
            && self.status.map_or(true, |status| record.status == status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QualityRepository {
    store: MemoryStore<QualityRecord>,
}

impl QualityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<QualityRecord>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, record: QualityRecord) -> QualityRecordId {
        self.store.insert(record)
    }

    pub fn update(
        &mut self,
        id: QualityRecordId,
        apply: impl FnOnce(&mut QualityRecord),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn list(&self, query: &QualityQuery) -> Vec<&QualityRecord> {
        self.store
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    pub fn all(&self) -> &[QualityRecord] {
        self.store.rows()
    }
}

//! Document repository.

use crate::model::document::{AccessLevel, Document, DocumentId, DocumentKind};
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for Document {
    fn id(&self) -> DocumentId {
        self.id
    }
}

/// Filter options for the document archive view.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    /// Substring over the file name.
    pub search: Option<String>,
    pub kind: Option<DocumentKind>,
    pub access_level: Option<AccessLevel>,
}

impl DocumentQuery {
    fn matches(&self, document: &Document) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => contains_ci(&document.name, term),
            None => true,
        };
        search_ok
            && self.kind.map_or(true, |kind| document.kind == kind)
            && self
                .access_level
                .map_or(true, |level| document.access_level == level)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentRepository {
    store: MemoryStore<Document>,
}

impl DocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Document>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, document: Document) -> DocumentId {
        self.store.insert(document)
    }

    pub fn delete(&mut self, id: DocumentId) -> RepoResult<Document> {
        self.store.remove(id)
    }

    pub fn list(&self, query: &DocumentQuery) -> Vec<&Document> {
        self.store
            .iter()
            .filter(|document| query.matches(document))
            .collect()
    }

    pub fn all(&self) -> &[Document] {
        self.store.rows()
    }
}

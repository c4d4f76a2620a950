//! Inventory repository for stocked parts.

use crate::model::inventory::{InventoryItem, InventoryItemId, PartCategory, StockStatus};
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for InventoryItem {
    fn id(&self) -> InventoryItemId {
        self.id
    }
}

/// Filter options for the stock view.
#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    /// Substring over part name and part number.
    pub search: Option<String>,
    pub category: Option<PartCategory>,
    pub status: Option<StockStatus>,
}

impl InventoryQuery {
    fn matches(&self, item: &InventoryItem) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => {
                contains_ci(&item.part_name, term) || contains_ci(&item.part_number, term)
            }
            None => true,
        };
        search_ok
            && self.category.map_or(true, |category| item.category == category)
            && self.status.map_or(true, |status| item.status == status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryRepository {
    store: MemoryStore<InventoryItem>,
}

impl InventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<InventoryItem>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, item: InventoryItem) -> InventoryItemId {
        self.store.insert(item)
    }

    pub fn update(
        &mut self,
        id: InventoryItemId,
        apply: impl FnOnce(&mut InventoryItem),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn list(&self, query: &InventoryQuery) -> Vec<&InventoryItem> {
        self.store.iter().filter(|item| query.matches(item)).collect()
    }

    pub fn all(&self) -> &[InventoryItem] {
        self.store.rows()
    }
}

//! Equipment repository for ordered tooling.

use crate::model::equipment::{Equipment, EquipmentId, EquipmentKind, ProductionStatus};
use crate::model::project::ProjectId;
use crate::repo::{contains_ci, Entity, MemoryStore, RepoResult};

impl Entity for Equipment {
    fn id(&self) -> EquipmentId {
        self.id
    }
}

/// Filter options for the equipment view.
#[derive(Debug, Clone, Default)]
pub struct EquipmentQuery {
    /// Substring over equipment name and supplier.
    pub search: Option<String>,
    pub project: Option<ProjectId>,
    pub kind: Option<EquipmentKind>,
    pub production_status: Option<ProductionStatus>,
}

impl EquipmentQuery {
    fn matches(&self, equipment: &Equipment) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) => {
                contains_ci(&equipment.name, term) || contains_ci(&equipment.supplier, term)
            }
            None => true,
        };
        search_ok
            && self.project.map_or(true, |id| equipment.project_id == id)
            && self.kind.map_or(true, |kind| equipment.kind == kind)
            && self
                .production_status
                .map_or(true, |status| equipment.production_status == status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentRepository {
    store: MemoryStore<Equipment>,
}

impl EquipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Equipment>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn create(&mut self, equipment: Equipment) -> EquipmentId {
        self.store.insert(equipment)
    }

    pub fn get(&self, id: EquipmentId) -> Option<&Equipment> {
        self.store.get(id)
    }

    pub fn update(
        &mut self,
        id: EquipmentId,
        apply: impl FnOnce(&mut Equipment),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn delete(&mut self, id: EquipmentId) -> RepoResult<Equipment> {
        self.store.remove(id)
    }

    pub fn list(&self, query: &EquipmentQuery) -> Vec<&Equipment> {
        self.store
            .iter()
            .filter(|equipment| query.matches(equipment))
            .collect()
    }

    pub fn all(&self) -> &[Equipment] {
        self.store.rows()
    }
}

//! Equipment use-case service.
//!
//! Every mutation stamps `last_updated`; the row date refreshes on each
//! edit.

use crate::model::budget::Amount;
use crate::model::equipment::{
    Equipment, EquipmentId, EquipmentKind, PaymentStatus, ProductionStatus,
};
use crate::model::project::ProjectId;
use crate::repo::equipment_repo::EquipmentRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentServiceError {
    MissingField(&'static str),
    NotFound(EquipmentId),
}

impl Display for EquipmentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is blank: {field}"),
            Self::NotFound(id) => write!(f, "equipment not found: {id}"),
        }
    }
}

impl Error for EquipmentServiceError {}

impl From<RepoError> for EquipmentServiceError {
    fn from(value: RepoError) -> Self {
        let RepoError::NotFound(id) = value;
        Self::NotFound(id)
    }
}

/// Input of the new-equipment form.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub kind: EquipmentKind,
    pub project_id: ProjectId,
    pub supplier: String,
    pub order_date: Date,
    pub delivery_date: Date,
    pub cost: Amount,
    pub description: String,
    pub specifications: String,
}

/// Partial edit applied from the inline editor.
#[derive(Debug, Clone, Default)]
pub struct EquipmentUpdate {
    pub name: Option<String>,
    pub production_status: Option<ProductionStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub cost: Option<Amount>,
    pub delivery_date: Option<Date>,
}

/// Facade over the equipment repository.
pub struct EquipmentService<'a> {
    repo: &'a mut EquipmentRepository,
}

impl<'a> EquipmentService<'a> {
    pub fn new(repo: &'a mut EquipmentRepository) -> Self {
        Self { repo }
    }

    /// Adds equipment with order defaults: production not started, nothing
    /// paid yet.
    pub fn add(
        &mut self,
        draft: NewEquipment,
        today: Date,
    ) -> Result<EquipmentId, EquipmentServiceError> {
        if draft.name.trim().is_empty() {
            return Err(EquipmentServiceError::MissingField("name"));
        }
        if draft.supplier.trim().is_empty() {
            return Err(EquipmentServiceError::MissingField("supplier"));
        }
        Ok(self.repo.create(Equipment {
            id: Uuid::new_v4(),
            name: draft.name,
            kind: draft.kind,
            project_id: draft.project_id,
            supplier: draft.supplier,
            order_date: draft.order_date,
            delivery_date: draft.delivery_date,
            cost: draft.cost,
            production_status: ProductionStatus::NotStarted,
            payment_status: PaymentStatus::NotPaid,
            description: draft.description,
            specifications: draft.specifications,
            last_updated: today,
        }))
    }

    /// Applies the edit and stamps `last_updated`.
    pub fn apply_update(
        &mut self,
        id: EquipmentId,
        update: EquipmentUpdate,
        today: Date,
    ) -> Result<(), EquipmentServiceError> {
        Ok(self.repo.update(id, |equipment| {
            if let Some(name) = update.name {
                equipment.name = name;
            }
            if let Some(status) = update.production_status {
                equipment.production_status = status;
            }
            if let Some(status) = update.payment_status {
                equipment.payment_status = status;
            }
            if let Some(cost) = update.cost {
                equipment.cost = cost;
            }
            if let Some(delivery_date) = update.delivery_date {
                equipment.delivery_date = delivery_date;
            }
            equipment.last_updated = today;
        })?)
    }

    pub fn remove(&mut self, id: EquipmentId) -> Result<Equipment, EquipmentServiceError> {
        Ok(self.repo.delete(id)?)
    }
}

//! Count aggregates for the record-keeping views.

use crate::model::budget::Amount;
use crate::model::change::{ChangeRequest, ChangeRequestStatus};
use crate::model::common::Priority;
use crate::model::document::{Document, DocumentKind};
use crate::model::equipment::{Equipment, ProductionStatus};
use crate::model::escalation::DelayedAction;
use crate::model::inventory::{InventoryItem, StockStatus};
use crate::model::notification::Notification;
use crate::model::quality::{QualityRecord, QualityStatus};
use std::collections::HashSet;

/// Stock availability counters on the inventory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockStats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

pub fn stock_stats(items: &[InventoryItem]) -> StockStats {
    let by_status =
        |status: StockStatus| items.iter().filter(|item| item.status == status).count();
    StockStats {
        total: items.len(),
        in_stock: by_status(StockStatus::InStock),
        low_stock: by_status(StockStatus::LowStock),
        out_of_stock: by_status(StockStatus::OutOfStock),
    }
}

/// Counters and total cost on the equipment view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub delayed: usize,
    pub total_cost: Amount,
}

pub fn equipment_stats(equipment: &[Equipment]) -> EquipmentStats {
    let by_status = |status: ProductionStatus| {
        equipment
            .iter()
            .filter(|item| item.production_status == status)
            .count()
    };
    EquipmentStats {
        total: equipment.len(),
        completed: by_status(ProductionStatus::Completed),
        in_progress: by_status(ProductionStatus::InProgress),
        delayed: by_status(ProductionStatus::Delayed),
        total_cost: equipment.iter().map(|item| item.cost).sum(),
    }
}

/// Counters on the document archive view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub total: usize,
    pub cad: usize,
    pub drawings: usize,
    pub reports: usize,
}

pub fn document_stats(documents: &[Document]) -> DocumentStats {
    let by_kind =
        |kind: DocumentKind| documents.iter().filter(|doc| doc.kind == kind).count();
    DocumentStats {
        total: documents.len(),
        cad: by_kind(DocumentKind::Cad),
        drawings: by_kind(DocumentKind::Drawing),
        reports: by_kind(DocumentKind::Report),
    }
}

/// Counters on the change-request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub implemented: usize,
}

pub fn change_request_stats(requests: &[ChangeRequest]) -> ChangeRequestStats {
    let by_status = |status: ChangeRequestStatus| {
        requests.iter().filter(|req| req.status == status).count()
    };
    ChangeRequestStats {
        total: requests.len(),
        pending: by_status(ChangeRequestStatus::Pending),
        approved: by_status(ChangeRequestStatus::Approved),
        implemented: by_status(ChangeRequestStatus::Implemented),
    }
}

/// Per-status counters on the quality view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityStats {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub in_review: usize,
    pub pending: usize,
}

pub fn quality_stats(records: &[QualityRecord]) -> QualityStats {
    let by_status =
        |status: QualityStatus| records.iter().filter(|rec| rec.status == status).count();
    QualityStats {
        total: records.len(),
        approved: by_status(QualityStatus::Approved),
        rejected: by_status(QualityStatus::Rejected),
        in_review: by_status(QualityStatus::InReview),
        pending: by_status(QualityStatus::Pending),
    }
}

/// Unread/critical counters on the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStats {
    pub total: usize,
    pub unread: usize,
    pub critical: usize,
}

pub fn notification_stats(notifications: &[Notification]) -> NotificationStats {
    NotificationStats {
        total: notifications.len(),
        unread: notifications.iter().filter(|n| !n.read).count(),
        critical: notifications
            .iter()
            .filter(|n| n.priority == Priority::Critical)
            .count(),
    }
}

/// Headline counters on the escalation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationStats {
    pub critical_delayed: usize,
    pub total_overdue_days: u32,
    pub distinct_assignees: usize,
}

pub fn escalation_stats(actions: &[DelayedAction]) -> EscalationStats {
    let assignees: HashSet<&str> =
        actions.iter().map(|action| action.assignee.as_str()).collect();
    EscalationStats {
        critical_delayed: actions
            .iter()
            .filter(|action| action.priority == Priority::Critical)
            .count(),
        total_overdue_days: actions.iter().map(|action| action.days_overdue).sum(),
        distinct_assignees: assignees.len(),
    }
}

//! Tooling equipment: molds, fixtures, tools and gauges ordered per project.

use crate::model::budget::Amount;
use crate::model::common::Tone;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable equipment identifier.
pub type EquipmentId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentKind {
    Mold,
    Fixture,
    Tool,
    Gauge,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 4] = [
        EquipmentKind::Mold,
        EquipmentKind::Fixture,
        EquipmentKind::Tool,
        EquipmentKind::Gauge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EquipmentKind::Mold => "Kalıp",
            EquipmentKind::Fixture => "Fikstür",
            EquipmentKind::Tool => "Takım",
            EquipmentKind::Gauge => "Ölçü Aleti",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentKind::Mold => "mold",
            EquipmentKind::Fixture => "fixture",
            EquipmentKind::Tool => "tool",
            EquipmentKind::Gauge => "gauge",
        }
    }

    pub fn parse(value: &str) -> Option<EquipmentKind> {
        match value {
            "mold" => Some(EquipmentKind::Mold),
            "fixture" => Some(EquipmentKind::Fixture),
            "tool" => Some(EquipmentKind::Tool),
            "gauge" => Some(EquipmentKind::Gauge),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            EquipmentKind::Mold => Tone::Blue,
            EquipmentKind::Fixture => Tone::Green,
            EquipmentKind::Tool => Tone::Yellow,
            EquipmentKind::Gauge => Tone::Purple,
        }
    }
}

/// Supplier-side manufacturing state of the equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductionStatus {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
}

impl ProductionStatus {
    pub const ALL: [ProductionStatus; 4] = [
        ProductionStatus::NotStarted,
        ProductionStatus::InProgress,
        ProductionStatus::Completed,
        ProductionStatus::Delayed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductionStatus::NotStarted => "Başlamadı",
            ProductionStatus::InProgress => "Devam Ediyor",
            ProductionStatus::Completed => "Tamamlandı",
            ProductionStatus::Delayed => "Gecikmiş",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductionStatus::NotStarted => "not-started",
            ProductionStatus::InProgress => "in-progress",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Delayed => "delayed",
        }
    }

    pub fn parse(value: &str) -> Option<ProductionStatus> {
        match value {
            "not-started" => Some(ProductionStatus::NotStarted),
            "in-progress" => Some(ProductionStatus::InProgress),
            "completed" => Some(ProductionStatus::Completed),
            "delayed" => Some(ProductionStatus::Delayed),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ProductionStatus::NotStarted => Tone::Gray,
            ProductionStatus::InProgress => Tone::Blue,
            ProductionStatus::Completed => Tone::Green,
            ProductionStatus::Delayed => Tone::Red,
        }
    }
}

/// Payment progress toward the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    NotPaid,
    Partial,
    Completed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "Ödenmedi",
            PaymentStatus::Partial => "Kısmi Ödendi",
            PaymentStatus::Completed => "Tamamlandı",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "not-paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentStatus> {
        match value {
            "not-paid" => Some(PaymentStatus::NotPaid),
            "partial" => Some(PaymentStatus::Partial),
            "completed" => Some(PaymentStatus::Completed),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PaymentStatus::NotPaid => Tone::Red,
            PaymentStatus::Partial => Tone::Yellow,
            PaymentStatus::Completed => Tone::Green,
        }
    }
}

/// One piece of ordered tooling equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub kind: EquipmentKind,
    pub project_id: ProjectId,
    pub supplier: String,
    pub order_date: Date,
    pub delivery_date: Date,
    pub cost: Amount,
    pub production_status: ProductionStatus,
    pub payment_status: PaymentStatus,
    pub description: String,
    pub specifications: String,
    pub last_updated: Date,
}

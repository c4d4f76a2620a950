//! Part stock kept for prototyping and serial production.

use crate::model::common::Tone;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable inventory-item identifier.
pub type InventoryItemId = Uuid;

/// What the part is stocked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartCategory {
    Proto,
    Serial,
    Test,
    Tooling,
}

impl PartCategory {
    pub const ALL: [PartCategory; 4] = [
        PartCategory::Proto,
        PartCategory::Serial,
        PartCategory::Test,
        PartCategory::Tooling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartCategory::Proto => "Prototip",
            PartCategory::Serial => "Seri",
            PartCategory::Test => "Test",
            PartCategory::Tooling => "Takım",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartCategory::Proto => "proto",
            PartCategory::Serial => "serial",
            PartCategory::Test => "test",
            PartCategory::Tooling => "tooling",
        }
    }

    pub fn parse(value: &str) -> Option<PartCategory> {
        match value {
            "proto" => Some(PartCategory::Proto),
            "serial" => Some(PartCategory::Serial),
            "test" => Some(PartCategory::Test),
            "tooling" => Some(PartCategory::Tooling),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PartCategory::Proto => Tone::Purple,
            PartCategory::Serial => Tone::Blue,
            PartCategory::Test => Tone::Orange,
            PartCategory::Tooling => Tone::Gray,
        }
    }
}

/// Availability of a stocked part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Ordered,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
        StockStatus::Ordered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "Stokta",
            StockStatus::LowStock => "Az Stok",
            StockStatus::OutOfStock => "Stok Yok",
            StockStatus::Ordered => "Sipariş Verildi",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::Ordered => "ordered",
        }
    }

    pub fn parse(value: &str) -> Option<StockStatus> {
        match value {
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            "ordered" => Some(StockStatus::Ordered),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StockStatus::InStock => Tone::Green,
            StockStatus::LowStock => Tone::Yellow,
            StockStatus::OutOfStock => Tone::Red,
            StockStatus::Ordered => Tone::Blue,
        }
    }
}

/// One stocked part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub part_number: String,
    pub part_name: String,
    pub category: PartCategory,
    pub quantity: u32,
    /// Display unit, e.g. `adet`.
    pub unit: String,
    pub supplier: String,
    pub status: StockStatus,
    pub last_updated: Date,
}

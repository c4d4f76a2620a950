//! Project budget with nested category and subcategory totals.
//!
//! The rollup relation `sum(subcategory.spent) ~= category.spent` and
//! `sum(category.spent) ~= budget.spent` is intended but not enforced
//! anywhere; statistics read whatever the rows say.

use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable budget identifier.
pub type BudgetId = Uuid;

/// Monetary amount in whole currency units (TRY for seeded data).
pub type Amount = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSubcategory {
    pub id: Uuid,
    pub name: String,
    pub budgeted_amount: Amount,
    pub spent_amount: Amount,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    pub budgeted_amount: Amount,
    pub spent_amount: Amount,
    pub subcategories: Vec<BudgetSubcategory>,
}

/// The money plan of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub project_id: ProjectId,
    pub total_budget: Amount,
    pub spent_amount: Amount,
    pub categories: Vec<BudgetCategory>,
    /// ISO 4217 code; seeded data uses `TRY`.
    pub currency: String,
    pub last_updated: Date,
}

impl Budget {
    pub fn remaining(&self) -> Amount {
        self.total_budget - self.spent_amount
    }
}

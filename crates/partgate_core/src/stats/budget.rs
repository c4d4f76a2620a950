//! Budget aggregates: utilization, donut geometry and variance rows.

use crate::model::budget::{Amount, Budget, BudgetCategory};

/// The four stat cards on the finance view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: Amount,
    pub spent_amount: Amount,
    pub remaining: Amount,
    pub utilization_pct: f64,
}

pub fn summarize(budget: &Budget) -> BudgetSummary {
    let utilization_pct = if budget.total_budget == 0 {
        0.0
    } else {
        budget.spent_amount as f64 / budget.total_budget as f64 * 100.0
    };
    BudgetSummary {
        total_budget: budget.total_budget,
        spent_amount: budget.spent_amount,
        remaining: budget.remaining(),
        utilization_pct,
    }
}

/// One arc of the spending donut.
///
/// `percentage` is the category's share of the *total* budget and
/// `offset_pct` the running sum of the shares before it, which is exactly
/// the dash-array/dash-offset pair the SVG donut consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub spent_amount: Amount,
    pub percentage: f64,
    pub offset_pct: f64,
}

pub fn donut_segments(budget: &Budget) -> Vec<DonutSegment> {
    let total = budget.total_budget;
    let mut offset = 0.0;
    budget
        .categories
        .iter()
        .map(|category| {
            let percentage = if total == 0 {
                0.0
            } else {
                category.spent_amount as f64 / total as f64 * 100.0
            };
            let segment = DonutSegment {
                name: category.name.clone(),
                spent_amount: category.spent_amount,
                percentage,
                offset_pct: offset,
            };
            offset += percentage;
            segment
        })
        .collect()
}

/// One row of the budget-analysis report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarianceRow {
    pub category: String,
    pub budgeted: Amount,
    pub spent: Amount,
    /// `spent - budgeted`; negative while under budget.
    pub variance: Amount,
}

pub fn variance_rows(budget: &Budget) -> Vec<VarianceRow> {
    budget
        .categories
        .iter()
        .map(|category| VarianceRow {
            category: category.name.clone(),
            budgeted: category.budgeted_amount,
            spent: category.spent_amount,
            variance: category.spent_amount - category.budgeted_amount,
        })
        .collect()
}

/// One subcategory line of the expense breakdown panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryShare {
    pub name: String,
    pub budgeted: Amount,
    pub spent: Amount,
    /// Share of the parent category's spending.
    pub pct_of_category: f64,
}

pub fn category_breakdown(category: &BudgetCategory) -> Vec<SubcategoryShare> {
    category
        .subcategories
        .iter()
        .map(|sub| SubcategoryShare {
            name: sub.name.clone(),
            budgeted: sub.budgeted_amount,
            spent: sub.spent_amount,
            pct_of_category: if category.spent_amount == 0 {
                0.0
            } else {
                sub.spent_amount as f64 / category.spent_amount as f64 * 100.0
            },
        })
        .collect()
}

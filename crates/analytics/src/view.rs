use chrono::NaiveDate;
use models::{CategoryFilter, Expense};
use serde::Serialize;

use crate::{
    breakdown::{category_totals, summary, CategoryTotal, Summary},
    current_month, filter_by_category, sort_by_date_descending,
};

/// Everything a presentation layer needs for one render pass, derived in a
/// single call. Summary and breakdown always cover the full collection; only
/// the visible list respects the active filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filter: CategoryFilter,
    pub visible: Vec<Expense>,
    pub breakdown: Vec<CategoryTotal>,
    pub summary: Summary,
    pub current_month_total: f64,
}

impl DashboardView {
    pub fn build(expenses: &[Expense], filter: CategoryFilter, reference: NaiveDate) -> Self {
        let visible = sort_by_date_descending(&filter_by_category(expenses, filter));
        let current_month_total = current_month(expenses, reference)
            .iter()
            .map(|e| e.amount)
            .sum();

        DashboardView {
            filter,
            visible,
            breakdown: category_totals(expenses),
            summary: summary(expenses),
            current_month_total,
        }
    }
}

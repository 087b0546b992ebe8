//! Pure derivations over the canonical expense collection. Every function
//! here is stateless: identical inputs yield identical outputs, so callers
//! may memoize but never have to.

pub mod breakdown;
pub mod view;

pub use breakdown::{category_totals, summary, CategoryTotal, Summary};
pub use view::DashboardView;

use chrono::{Datelike, NaiveDate};
use models::{CategoryFilter, Expense};

/// Subset matching the active filter. Identity for `CategoryFilter::All`.
pub fn filter_by_category(expenses: &[Expense], filter: CategoryFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| filter.matches(e.category))
        .cloned()
        .collect()
}

/// New sequence ordered by transaction date, most recent first. The sort is
/// stable, so records sharing a date keep their input order.
pub fn sort_by_date_descending(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Records whose transaction date falls in the same calendar month and year
/// as `reference`. The reference date comes from the caller, which keeps the
/// timezone choice out of this layer.
pub fn current_month(expenses: &[Expense], reference: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
        .cloned()
        .collect()
}

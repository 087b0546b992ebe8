use std::collections::HashMap;

use models::{Category, Expense};
use serde::Serialize;

/// Total spend for one category, with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
}

/// Headline numbers for the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub top_category: Option<CategoryTotal>,
}

/// Per-category sums, largest first. Categories with no records are omitted
/// rather than zero-filled. Percentages are of the grand total and all zero
/// when the total itself is zero.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<Category, f64> = HashMap::new();
    for expense in expenses {
        *sums.entry(expense.category).or_insert(0.0) += expense.amount;
    }

    let total: f64 = sums.values().sum();

    // Walk the registry order so equal amounts come out in a fixed order,
    // then stable-sort by amount.
    let mut totals: Vec<CategoryTotal> = Category::ALL
        .into_iter()
        .filter_map(|category| {
            sums.get(&category).map(|&amount| CategoryTotal {
                category,
                amount,
                percentage: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            })
        })
        .collect();
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// Summary statistics for the whole collection. An empty collection yields
/// zeros and no top category, never an error.
pub fn summary(expenses: &[Expense]) -> Summary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let average = if count > 0 { total / count as f64 } else { 0.0 };
    let top_category = category_totals(expenses).into_iter().next();

    Summary {
        total,
        count,
        average,
        top_category,
    }
}

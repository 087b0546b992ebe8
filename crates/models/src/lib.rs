pub mod category;
pub mod seed;

pub use category::{Category, CategoryFilter, CategoryInfo, UnknownCategory};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded transaction. Immutable once created; edits are not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    /// Transaction date as entered by the user, distinct from `created_at`.
    pub date: NaiveDate,
    /// Set once when the record is created, never mutated afterwards.
    pub created_at: DateTime<Utc>,
}

/// Raw input for the add intent: everything a record needs except the
/// generated `id` and `created_at`. The amount is kept as the user-entered
/// text and parsed at the store boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category,
            date,
        }
    }
}

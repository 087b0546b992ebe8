//! The demo dataset the bootstrap source serves. Ids and timestamps are
//! fixed so sessions and tests see the same records.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Category, Expense};

fn record(
    id: u128,
    description: &str,
    amount: f64,
    category: Category,
    date: (i32, u32, u32),
    created_at: &str,
) -> Expense {
    let (year, month, day) = date;
    Expense {
        id: Uuid::from_u128(id),
        description: description.to_string(),
        amount,
        category,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        created_at: created_at
            .parse::<DateTime<Utc>>()
            .unwrap(),
    }
}

/// The eight seed records. Category totals: food 109.50, transport 138.50,
/// entertainment 15.99, utilities 145.00, shopping 199.99, health 32.50.
pub fn seed_expenses() -> Vec<Expense> {
    vec![
        record(
            1,
            "Grocery shopping",
            85.50,
            Category::Food,
            (2024, 1, 15),
            "2024-01-15T10:30:00Z",
        ),
        record(
            2,
            "Monthly transit pass",
            120.00,
            Category::Transport,
            (2024, 1, 14),
            "2024-01-14T09:00:00Z",
        ),
        record(
            3,
            "Netflix subscription",
            15.99,
            Category::Entertainment,
            (2024, 1, 13),
            "2024-01-13T08:00:00Z",
        ),
        record(
            4,
            "Electric bill",
            145.00,
            Category::Utilities,
            (2024, 1, 12),
            "2024-01-12T14:00:00Z",
        ),
        record(
            5,
            "New headphones",
            199.99,
            Category::Shopping,
            (2024, 1, 11),
            "2024-01-11T16:30:00Z",
        ),
        record(
            6,
            "Pharmacy",
            32.50,
            Category::Health,
            (2024, 1, 10),
            "2024-01-10T11:00:00Z",
        ),
        record(
            7,
            "Coffee with friends",
            24.00,
            Category::Food,
            (2024, 1, 9),
            "2024-01-09T15:00:00Z",
        ),
        record(
            8,
            "Uber ride",
            18.50,
            Category::Transport,
            (2024, 1, 8),
            "2024-01-08T20:00:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_eight_records_with_unique_ids() {
        let seed = seed_expenses();
        assert_eq!(seed.len(), 8);

        let mut ids: Vec<_> = seed.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn seed_amounts_are_positive_and_sum_to_known_total() {
        let seed = seed_expenses();
        assert!(seed.iter().all(|e| e.amount > 0.0));

        let total: f64 = seed.iter().map(|e| e.amount).sum();
        assert!((total - 621.48).abs() < 1e-9);
    }
}

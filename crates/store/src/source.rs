use std::time::Duration;

use async_trait::async_trait;
use models::Expense;

use crate::error::SourceError;
use crate::store::ExpenseStore;

/// Bootstrap collaborator: one operation, one shot. No retry, no
/// cancellation, no timeout.
#[async_trait(?Send)]
pub trait ExpenseSource {
    async fn fetch_initial(&self) -> Result<Vec<Expense>, SourceError>;
}

/// Serves the built-in seed dataset after an artificial delay, standing in
/// for a network backend.
pub struct SeedExpenseSource {
    delay: Duration,
}

impl SeedExpenseSource {
    /// The delay the original mock backend used.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(800))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SeedExpenseSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ExpenseSource for SeedExpenseSource {
    async fn fetch_initial(&self) -> Result<Vec<Expense>, SourceError> {
        tokio::time::sleep(self.delay).await;
        Ok(models::seed::seed_expenses())
    }
}

/// Runs the bootstrap path: on success the store is initialized with the
/// fetched records, on failure it is marked load-failed and left empty.
pub async fn load_into(
    source: &dyn ExpenseSource,
    store: &mut ExpenseStore,
) -> Result<(), SourceError> {
    match source.fetch_initial().await {
        Ok(records) => {
            store.initialize(records);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "initial expense load failed");
            store.mark_load_failed();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadPhase;

    struct FailingSource;

    #[async_trait(?Send)]
    impl ExpenseSource for FailingSource {
        async fn fetch_initial(&self) -> Result<Vec<Expense>, SourceError> {
            Err(SourceError::Unavailable("backend offline".to_string()))
        }
    }

    #[tokio::test]
    async fn seed_source_yields_the_full_seed_set() {
        let source = SeedExpenseSource::with_delay(Duration::ZERO);
        let records = source.fetch_initial().await.unwrap();
        assert_eq!(records.len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn seed_source_waits_out_its_delay() {
        let source = SeedExpenseSource::new();
        let started = tokio::time::Instant::now();
        source.fetch_initial().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn load_into_initializes_the_store_on_success() {
        let mut store = ExpenseStore::new();
        let source = SeedExpenseSource::with_delay(Duration::ZERO);

        load_into(&source, &mut store).await.unwrap();

        assert_eq!(store.phase(), LoadPhase::Ready);
        assert_eq!(store.expenses().len(), 8);
    }

    #[tokio::test]
    async fn load_into_marks_failure_and_leaves_store_empty() {
        let mut store = ExpenseStore::new();

        let err = load_into(&FailingSource, &mut store).await.unwrap_err();

        assert_eq!(
            err,
            SourceError::Unavailable("backend offline".to_string())
        );
        assert_eq!(store.phase(), LoadPhase::Failed);
        assert!(store.expenses().is_empty());
    }
}

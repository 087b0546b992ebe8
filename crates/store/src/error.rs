use models::UnknownCategory;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Rejections from the add intent. Reported synchronously to the caller;
/// the canonical state is untouched when any of these fire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),

    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// Failure of the one-shot bootstrap fetch. The store stays empty; a caller
/// may re-invoke the bootstrap manually, the store never retries on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("failed to load initial expenses: {0}")]
    Unavailable(String),
}

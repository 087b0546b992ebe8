pub mod error;
pub mod source;
pub mod store;

pub use error::{Result, SourceError, StoreError};
pub use source::{load_into, ExpenseSource, SeedExpenseSource};
pub use store::{ExpenseStore, LoadPhase, StoreEvent, SubscriptionId};

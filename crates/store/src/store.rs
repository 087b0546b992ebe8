use chrono::{DateTime, NaiveDate, Utc};
use models::{CategoryFilter, Expense, ExpenseDraft};
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Where the store is in its bootstrap lifecycle. Mutation intents are
/// structurally permitted in every phase; while `Loading` they simply
/// operate on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// What changed, delivered to every listener after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Initialized,
    Added(Uuid),
    Removed(Uuid),
    FilterChanged(CategoryFilter),
    LoadFailed,
}

pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(StoreEvent)>;

/// Sole owner of the canonical expense collection and the active filter.
/// All reads and writes happen on one logical thread; the store takes no
/// locks and is not `Sync`.
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    filter: CategoryFilter,
    phase: LoadPhase,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
    clock: fn() -> DateTime<Utc>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Tests pass a fixed clock so `created_at` is deterministic.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            expenses: Vec::new(),
            filter: CategoryFilter::All,
            phase: LoadPhase::Loading,
            listeners: Vec::new(),
            next_subscription: 0,
            clock,
        }
    }

    // ---- bootstrap path -------------------------------------------------

    /// Wholesale replacement of the canonical collection. Used once by the
    /// bootstrap collaborator.
    pub fn initialize(&mut self, records: Vec<Expense>) {
        tracing::info!(count = records.len(), "store initialized");
        self.expenses = records;
        self.phase = LoadPhase::Ready;
        self.notify(StoreEvent::Initialized);
    }

    /// Marks the bootstrap as failed. The collection stays empty so the
    /// presentation layer can surface a load-failed state.
    pub fn mark_load_failed(&mut self) {
        self.phase = LoadPhase::Failed;
        self.notify(StoreEvent::LoadFailed);
    }

    // ---- mutation intents -----------------------------------------------

    /// Validates the draft, mints an id and creation timestamp, and prepends
    /// the record so the canonical order stays most-recent-first. On any
    /// rejection the state is untouched.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<&Expense> {
        let description = draft.description.trim();
        if description.is_empty() {
            tracing::warn!("rejected draft: empty description");
            return Err(StoreError::EmptyDescription);
        }

        let amount: f64 = draft
            .amount
            .trim()
            .parse()
            .map_err(|_| StoreError::InvalidAmount(draft.amount.clone()))?;
        if !amount.is_finite() {
            return Err(StoreError::InvalidAmount(draft.amount.clone()));
        }
        if amount <= 0.0 {
            tracing::warn!(amount, "rejected draft: non-positive amount");
            return Err(StoreError::NonPositiveAmount(amount));
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount,
            category: draft.category,
            date: draft.date,
            created_at: (self.clock)(),
        };
        let id = expense.id;
        tracing::debug!(%id, amount, category = %expense.category, "expense added");

        self.expenses.insert(0, expense);
        self.notify(StoreEvent::Added(id));
        Ok(&self.expenses[0])
    }

    /// Removes the record with the given id. Unknown ids are an idempotent
    /// no-op: nothing changes and no listener fires.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        if removed {
            tracing::debug!(%id, "expense removed");
            self.notify(StoreEvent::Removed(id));
        }
        removed
    }

    /// Replaces the active filter. Always succeeds.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.notify(StoreEvent::FilterChanged(filter));
    }

    // ---- subscriptions --------------------------------------------------

    /// Registers a listener called after every successful mutation. No
    /// ordering guarantee among listeners.
    pub fn subscribe(&mut self, listener: impl FnMut(StoreEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sub, _)| *sub != id);
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    // ---- read accessors -------------------------------------------------

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    // ---- derived views --------------------------------------------------
    //
    // Recomputed on every read from the canonical state; nothing here is
    // cached, so there is no invalidation to get wrong.

    /// The list the user sees: filtered, most recent date first.
    pub fn visible_expenses(&self) -> Vec<Expense> {
        analytics::sort_by_date_descending(&analytics::filter_by_category(
            &self.expenses,
            self.filter,
        ))
    }

    pub fn breakdown(&self) -> Vec<analytics::CategoryTotal> {
        analytics::category_totals(&self.expenses)
    }

    pub fn summary(&self) -> analytics::Summary {
        analytics::summary(&self.expenses)
    }

    pub fn current_month(&self, reference: NaiveDate) -> Vec<Expense> {
        analytics::current_month(&self.expenses, reference)
    }

    pub fn dashboard(&self, reference: NaiveDate) -> analytics::DashboardView {
        analytics::DashboardView::build(&self.expenses, self.filter, reference)
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_706_745_600, 0).unwrap() // 2024-02-01T00:00:00Z
    }

    fn ready_store() -> ExpenseStore {
        let mut store = ExpenseStore::with_clock(fixed_now);
        store.initialize(models::seed::seed_expenses());
        store
    }

    fn draft(description: &str, amount: &str) -> ExpenseDraft {
        ExpenseDraft::new(
            description,
            amount,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }

    #[test]
    fn starts_empty_and_loading() {
        let store = ExpenseStore::new();
        assert!(store.expenses().is_empty());
        assert_eq!(store.phase(), LoadPhase::Loading);
        assert_eq!(store.filter(), CategoryFilter::All);
    }

    #[test]
    fn initialize_replaces_collection_and_sets_ready() {
        let store = ready_store();
        assert_eq!(store.expenses().len(), 8);
        assert_eq!(store.phase(), LoadPhase::Ready);
    }

    #[test]
    fn add_prepends_with_fresh_id_and_created_at() {
        let mut store = ready_store();
        let before = store.expenses().len();

        let id = {
            let added = store
                .add(draft("Coffee", "4.5"))
                .expect("valid draft should be accepted");
            assert_eq!(added.description, "Coffee");
            assert_eq!(added.amount, 4.5);
            assert_eq!(added.created_at, fixed_now());
            added.id
        };

        assert_eq!(store.expenses().len(), before + 1);
        assert_eq!(store.expenses()[0].id, id);
        assert!(store.expenses()[1..].iter().all(|e| e.id != id));
    }

    #[test]
    fn add_trims_the_description() {
        let mut store = ready_store();
        let added = store.add(draft("  Coffee  ", "4.5")).unwrap();
        assert_eq!(added.description, "Coffee");
    }

    #[test]
    fn add_rejects_blank_description() {
        let mut store = ready_store();
        let err = store.add(draft("  ", "4.5")).unwrap_err();
        assert_eq!(err, StoreError::EmptyDescription);
        assert_eq!(store.expenses().len(), 8);
    }

    #[test]
    fn add_rejects_zero_and_negative_amounts() {
        let mut store = ready_store();
        assert_eq!(
            store.add(draft("Coffee", "0")).unwrap_err(),
            StoreError::NonPositiveAmount(0.0)
        );
        assert_eq!(
            store.add(draft("Coffee", "-5")).unwrap_err(),
            StoreError::NonPositiveAmount(-5.0)
        );
        assert_eq!(store.expenses().len(), 8);
    }

    #[test]
    fn add_rejects_non_numeric_amounts() {
        let mut store = ready_store();
        assert_eq!(
            store.add(draft("Coffee", "4.5.0")).unwrap_err(),
            StoreError::InvalidAmount("4.5.0".to_string())
        );
        assert_eq!(
            store.add(draft("Coffee", "inf")).unwrap_err(),
            StoreError::InvalidAmount("inf".to_string())
        );
    }

    #[test]
    fn remove_deletes_matching_record() {
        let mut store = ready_store();
        let id = store.expenses()[0].id;
        assert!(store.remove(id));
        assert_eq!(store.expenses().len(), 7);
        assert!(store.expenses().iter().all(|e| e.id != id));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = ready_store();
        assert!(!store.remove(Uuid::from_u128(0xdead)));
        assert_eq!(store.expenses().len(), 8);
    }

    #[test]
    fn mutations_work_while_loading() {
        let mut store = ExpenseStore::with_clock(fixed_now);
        assert_eq!(store.phase(), LoadPhase::Loading);
        store.add(draft("Coffee", "4.5")).unwrap();
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn listeners_see_every_successful_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();

        let mut store = ExpenseStore::with_clock(fixed_now);
        store.subscribe(move |event| sink.borrow_mut().push(event));

        store.initialize(models::seed::seed_expenses());
        let id = store.add(draft("Coffee", "4.5")).unwrap().id;
        store.remove(id);
        store.remove(Uuid::from_u128(0xdead)); // no-op, no event
        store.add(draft(" ", "4.5")).unwrap_err(); // rejected, no event
        store.set_filter(CategoryFilter::Only(Category::Health));

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Initialized,
                StoreEvent::Added(id),
                StoreEvent::Removed(id),
                StoreEvent::FilterChanged(CategoryFilter::Only(Category::Health)),
            ]
        );
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving_events() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = count.clone();

        let mut store = ready_store();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set_filter(CategoryFilter::All);
        store.unsubscribe(id);
        store.set_filter(CategoryFilter::All);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn mark_load_failed_keeps_collection_empty() {
        let mut store = ExpenseStore::new();
        store.mark_load_failed();
        assert_eq!(store.phase(), LoadPhase::Failed);
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn visible_expenses_respect_filter_and_order() {
        let mut store = ready_store();
        store.set_filter(CategoryFilter::Only(Category::Food));

        let visible = store.visible_expenses();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.category == Category::Food));
        assert!(visible[0].date >= visible[1].date);
    }

    #[test]
    fn ids_stay_unique_across_adds() {
        let mut store = ready_store();
        for _ in 0..20 {
            store.add(draft("Coffee", "4.5")).unwrap();
        }
        let mut ids: Vec<_> = store.expenses().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.expenses().len());
    }
}

//! Expense persistence and notification collaborators.
//!
//! The parser never performs side effects. Committing or discarding an
//! extraction result happens exactly once, in [`record_expense`].

use tracing::{info, warn};

use crate::error::{Result, StoreError};
use crate::models::expense::ExpenseRecord;
use crate::receipt::ExtractionResult;

/// Persistence collaborator for extracted expenses.
pub trait ExpenseStore {
    /// Persist a new expense record.
    fn create(&mut self, record: ExpenseRecord) -> std::result::Result<(), StoreError>;
}

/// Notification collaborator for extraction outcomes.
pub trait ExpenseNotifier {
    /// An expense was created from the receipt.
    fn expense_created(&self, record: &ExpenseRecord);

    /// No valid total was found; nothing was stored.
    fn extraction_failed(&self);
}

/// In-memory store, used by tests and as a default sink.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ExpenseRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records created so far, in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }
}

impl ExpenseStore for MemoryStore {
    fn create(&mut self, record: ExpenseRecord) -> std::result::Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }
}

/// Notifier that reports outcomes through the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl ExpenseNotifier for TracingNotifier {
    fn expense_created(&self, record: &ExpenseRecord) {
        info!("recorded expense '{}' for {}", record.title, record.amount);
    }

    fn extraction_failed(&self) {
        warn!("no valid total amount found in receipt text");
    }
}

/// Commit or discard an extraction result.
///
/// Persists a record and notifies success iff the extraction succeeded;
/// otherwise notifies failure and stores nothing. Returns whether a record
/// was created.
pub fn record_expense<S, N>(
    result: &ExtractionResult,
    store: &mut S,
    notifier: &N,
) -> Result<bool>
where
    S: ExpenseStore,
    N: ExpenseNotifier,
{
    match ExpenseRecord::from_extraction(result) {
        Some(record) => {
            store.create(record.clone())?;
            notifier.expense_created(&record);
            Ok(true)
        }
        None => {
            notifier.extraction_failed();
            Ok(false)
        }
    }
}

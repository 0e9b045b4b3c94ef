//! Core library for receipt-text expense extraction.
//!
//! This crate provides:
//! - A best-effort parsing pipeline turning raw receipt text into a
//!   structured extraction result (amount, title, category, date)
//! - The static vendor keyword rules used for classification
//! - Expense record models and the persistence/notification seams that
//!   gate record creation on a successful extraction

pub mod error;
pub mod models;
pub mod receipt;
pub mod store;

pub use error::{KvitasError, Result};
pub use models::config::KvitasConfig;
pub use models::expense::ExpenseRecord;
pub use receipt::{ExtractionResult, NormalizedReceipt, ReceiptParser};
pub use store::{record_expense, ExpenseNotifier, ExpenseStore, MemoryStore, TracingNotifier};

//! Expense record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::receipt::ExtractionResult;

/// A persisted expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Human-readable title, e.g. "Uber Purchase".
    pub title: String,

    /// Total amount, with the fractional digits found on the receipt.
    pub amount: Decimal,

    /// Date of the expense.
    pub expense_date: NaiveDate,

    /// Expense category, e.g. "Travel".
    pub category: String,
}

impl ExpenseRecord {
    /// Build a record from a successful extraction.
    ///
    /// Returns `None` when the extraction did not succeed; a record without
    /// an amount must never be created.
    pub fn from_extraction(result: &ExtractionResult) -> Option<Self> {
        let amount = result.amount?;
        Some(Self {
            title: result.title.clone(),
            amount,
            expense_date: result.expense_date,
            category: result.category.clone(),
        })
    }
}

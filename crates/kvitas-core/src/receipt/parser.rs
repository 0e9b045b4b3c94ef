//! The receipt extraction pipeline.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::normalize::NormalizedReceipt;
use super::rules::{AmountExtractor, DateExtractor, FieldExtractor, VendorClassifier};

/// Title used when no vendor rule matches.
pub const DEFAULT_TITLE: &str = "Unknown Expense";

/// Category used when no vendor rule matches.
pub const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// Outcome of running the extraction pipeline over one receipt.
///
/// Constructed fresh per parse call and never mutated afterwards. The
/// persistence collaborator commits or discards it based on `succeeded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Best-guess total, absent when no monetary pattern was found.
    pub amount: Option<Decimal>,
    /// Expense title, `"<vendor> Purchase"` or the default.
    pub title: String,
    /// Expense category from the vendor rules or the default.
    pub category: String,
    /// Extracted date, or the fallback date when none was found.
    pub expense_date: NaiveDate,
    /// True iff an amount was found.
    pub succeeded: bool,
}

/// Best-effort receipt parser.
///
/// The pipeline is stateless and pure: amount extraction, vendor
/// classification, and date extraction are independent passes over the same
/// case-folded text, and every missing field resolves to a defined default
/// rather than an error. The only semantic failure mode is a missing amount,
/// reported through [`ExtractionResult::succeeded`].
pub struct ReceiptParser {
    fallback_date: Option<NaiveDate>,
}

impl ReceiptParser {
    /// Create a parser that falls back to the current date.
    pub fn new() -> Self {
        Self {
            fallback_date: None,
        }
    }

    /// Pin the date used when no date can be extracted.
    pub fn with_fallback_date(mut self, date: NaiveDate) -> Self {
        self.fallback_date = Some(date);
        self
    }

    /// Run the pipeline over raw receipt text.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        info!("parsing receipt from {} characters of text", text.len());

        let today = self
            .fallback_date
            .unwrap_or_else(|| Local::now().date_naive());
        let receipt = NormalizedReceipt::new(text);

        // Defaults first, overwritten by whatever the extractors find.
        let mut title = DEFAULT_TITLE.to_string();
        let mut category = DEFAULT_CATEGORY.to_string();
        let mut expense_date = today;

        let amount = AmountExtractor::new().extract(&receipt);

        if let Some(rule) = VendorClassifier::new().extract(&receipt) {
            title = rule.title();
            category = rule.category.to_string();
        }

        if let Some(date) = DateExtractor::new().extract(&receipt) {
            expense_date = date;
        }

        let succeeded = amount.is_some();
        debug!(
            "extracted '{}' ({}) on {}, amount {:?}",
            title, category, expense_date, amount
        );

        ExtractionResult {
            amount,
            title,
            category,
            expense_date,
            succeeded,
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

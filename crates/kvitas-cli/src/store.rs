//! File-backed expense store and console notifier for the CLI.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use console::style;

use kvitas_core::error::StoreError;
use kvitas_core::models::expense::ExpenseRecord;
use kvitas_core::store::{ExpenseNotifier, ExpenseStore};

/// Appends expense records to a JSON-lines ledger file.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ExpenseStore for JsonlStore {
    fn create(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// Prints extraction outcomes to the terminal.
pub struct ConsoleNotifier;

impl ExpenseNotifier for ConsoleNotifier {
    fn expense_created(&self, record: &ExpenseRecord) {
        println!(
            "{} Recorded '{}' for {}",
            style("✓").green(),
            record.title,
            record.amount
        );
    }

    fn extraction_failed(&self) {
        eprintln!(
            "{} Could not find a valid total amount in the receipt text.",
            style("✗").red()
        );
    }
}

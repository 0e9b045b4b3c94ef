//! Batch command - parse many receipt text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use kvitas_core::receipt::ExtractionResult;
use kvitas_core::store::{record_expense, TracingNotifier};

use crate::store::JsonlStore;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "receipts/*.txt")
    #[arg(required = true)]
    input: String,

    /// Summary CSV output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append successful expenses to a JSON-lines ledger file
    #[arg(short, long)]
    ledger: Option<PathBuf>,

    /// Fallback date for receipts without a parseable date (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<chrono::NaiveDate>,
}

/// Result of parsing a single file.
struct BatchEntry {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::parse::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|entry| entry.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to parse",
        style("ℹ").blue(),
        files.len()
    );

    let parser = super::parse::build_parser(args.date, &config);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => entries.push(BatchEntry {
                path,
                result: Some(parser.parse(&text)),
                error: None,
            }),
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                entries.push(BatchEntry {
                    path,
                    result: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    // Per-file outcomes go to the log rather than the terminal; the
    // summary table already carries them.
    if let Some(ledger_path) = &args.ledger {
        let mut store = JsonlStore::new(ledger_path.clone());
        for entry in &entries {
            if let Some(result) = &entry.result {
                record_expense(result, &mut store, &TracingNotifier)?;
            }
        }
    }

    let summary = write_summary(&entries)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, summary)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", summary);
    }

    let extracted = entries
        .iter()
        .filter(|e| e.result.as_ref().is_some_and(|r| r.succeeded))
        .count();
    let without_total = entries.len() - extracted;

    println!();
    println!(
        "{} Parsed {} files in {:?}",
        style("✓").green(),
        entries.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} without a valid total",
        style(extracted).green(),
        style(without_total).red()
    );

    Ok(())
}

fn write_summary(entries: &[BatchEntry]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "filename",
        "status",
        "title",
        "category",
        "amount",
        "expense_date",
        "error",
    ])?;

    for entry in entries {
        let filename = entry
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");

        match &entry.result {
            Some(result) => {
                let amount = result.amount.map(|a| a.to_string()).unwrap_or_default();
                let date = result.expense_date.to_string();
                wtr.write_record([
                    filename,
                    if result.succeeded { "extracted" } else { "no_total" },
                    result.title.as_str(),
                    result.category.as_str(),
                    amount.as_str(),
                    date.as_str(),
                    "",
                ])?;
            }
            None => {
                wtr.write_record([
                    filename,
                    "read_error",
                    "",
                    "",
                    "",
                    "",
                    entry.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

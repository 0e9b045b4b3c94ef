//! Parse command - extract an expense from a single receipt text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::debug;

use kvitas_core::models::config::KvitasConfig;
use kvitas_core::receipt::{ExtractionResult, ReceiptParser};
use kvitas_core::store::record_expense;

use crate::store::{ConsoleNotifier, JsonlStore};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input receipt text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Append the expense to a JSON-lines ledger file on success
    #[arg(short, long)]
    ledger: Option<PathBuf>,

    /// Fallback date for receipts without a parseable date (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;

    let result = build_parser(args.date, &config).parse(&text);
    debug!("extraction succeeded: {}", result.succeeded);

    if let Some(ledger_path) = &args.ledger {
        let mut store = JsonlStore::new(ledger_path.clone());
        record_expense(&result, &mut store, &ConsoleNotifier)?;
    }

    let format = args.format.unwrap_or_else(|| format_from_config(&config));
    let output = format_result(&result, format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<KvitasConfig> {
    Ok(match config_path {
        Some(path) => KvitasConfig::from_file(Path::new(path))?,
        None => KvitasConfig::default(),
    })
}

pub(crate) fn build_parser(date: Option<NaiveDate>, config: &KvitasConfig) -> ReceiptParser {
    match date.or(config.extraction.fallback_date) {
        Some(date) => ReceiptParser::new().with_fallback_date(date),
        None => ReceiptParser::new(),
    }
}

pub(crate) fn format_from_config(config: &KvitasConfig) -> OutputFormat {
    match config.output.format.as_str() {
        "csv" => OutputFormat::Csv,
        "text" => OutputFormat::Text,
        _ => OutputFormat::Json,
    }
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_result_csv(result),
        OutputFormat::Text => Ok(format_result_text(result)),
    }
}

fn format_result_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["title", "category", "amount", "expense_date", "succeeded"])?;

    let amount = result.amount.map(|a| a.to_string()).unwrap_or_default();
    let date = result.expense_date.to_string();
    wtr.write_record([
        result.title.as_str(),
        result.category.as_str(),
        amount.as_str(),
        date.as_str(),
        if result.succeeded { "true" } else { "false" },
    ])?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_result_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Title:    {}\n", result.title));
    output.push_str(&format!("Category: {}\n", result.category));
    match result.amount {
        Some(amount) => output.push_str(&format!("Amount:   {}\n", amount)),
        None => output.push_str("Amount:   (no valid total found)\n"),
    }
    output.push_str(&format!("Date:     {}\n", result.expense_date));

    output
}

//! End-to-end tests for the kvitas binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_receipt(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn kvitas() -> Command {
    Command::cargo_bin("kvitas").unwrap()
}

#[test]
fn parse_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(
        &dir,
        "receipt.txt",
        "Starbucks Coffee #1234\nMar 15, 2024\nSubtotal: 9.00\nTotal: 12.34\n",
    );

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Starbucks Purchase\""))
        .stdout(predicate::str::contains("\"category\": \"Food & Drink\""))
        .stdout(predicate::str::contains("12.34"))
        .stdout(predicate::str::contains("2024-03-15"));
}

#[test]
fn parse_reads_stdin() {
    kvitas()
        .arg("parse")
        .arg("-")
        .write_stdin("total: 5.00\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00"))
        .stdout(predicate::str::contains("\"succeeded\": true"));
}

#[test]
fn parse_without_total_still_reports_result() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(&dir, "receipt.txt", "thanks for shopping\n");

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"succeeded\": false"))
        .stdout(predicate::str::contains("\"title\": \"Unknown Expense\""));
}

#[test]
fn parse_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(&dir, "receipt.txt", "uber trip\ntotal: 23.50\n");

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:    Uber Purchase"))
        .stdout(predicate::str::contains("Amount:   23.50"));
}

#[test]
fn parse_appends_to_ledger_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(&dir, "receipt.txt", "uber trip\ntotal: 23.50\n");
    let ledger = dir.path().join("ledger.jsonl");

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .arg("--ledger")
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 'Uber Purchase' for 23.50"));

    let contents = std::fs::read_to_string(&ledger).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"title\":\"Uber Purchase\""));
}

#[test]
fn parse_failure_leaves_ledger_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(&dir, "receipt.txt", "no numbers here\n");
    let ledger = dir.path().join("ledger.jsonl");

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .arg("--ledger")
        .arg(&ledger)
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not find a valid total"));

    assert!(!ledger.exists());
}

#[test]
fn parse_pinned_fallback_date() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_receipt(&dir, "receipt.txt", "total: 5.00\n");

    kvitas()
        .arg("parse")
        .arg(&receipt)
        .args(["--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01"));
}

#[test]
fn batch_writes_csv_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_receipt(&dir, "a.txt", "starbucks\ntotal: 12.34\n");
    write_receipt(&dir, "b.txt", "no totals on this one\n");
    let summary = dir.path().join("summary.csv");

    kvitas()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output")
        .arg(&summary)
        .args(["--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 extracted, 1 without a valid total"));

    let contents = std::fs::read_to_string(&summary).unwrap();
    assert!(contents.contains("a.txt,extracted,Starbucks Purchase,Food & Drink,12.34,2024-06-01"));
    assert!(contents.contains("b.txt,no_total"));
}

#[test]
fn config_path_is_reported() {
    kvitas()
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"));
}

//! Regex patterns shared by the receipt field extractors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Monetary amount: optional currency symbol, then digits with exactly
    // two fractional digits (12.34, €12.34, $12.34)
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"[€$£]?(\d+)\.(\d{2})\b"
    ).unwrap();

    // "mar 15, 2024"
    pub static ref DATE_MONTH_ABBREV: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+(\d{1,2}),\s*(\d{4})\b"
    ).unwrap();

    // "2024-03-15"
    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})-(\d{2})-(\d{2})\b"
    ).unwrap();

    // "15/03/2024", day first
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{2})/(\d{2})/(\d{4})\b"
    ).unwrap();
}

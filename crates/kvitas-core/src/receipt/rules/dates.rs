//! Expense date extraction.

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::receipt::NormalizedReceipt;

use super::patterns::{DATE_DMY, DATE_MONTH_ABBREV, DATE_YMD};
use super::FieldExtractor;

type DateParser = fn(&Captures<'_>) -> Option<NaiveDate>;

/// Finds the expense date among several known formats.
///
/// Formats are tried in a fixed priority order. The first pattern with a
/// structural match anywhere in the text decides the format; if its captures
/// do not form a valid calendar date the extractor returns `None` instead of
/// trying the next pattern, and the pipeline falls back to today.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, receipt: &NormalizedReceipt) -> Option<NaiveDate> {
        let formats: [(&Regex, DateParser); 3] = [
            (&*DATE_MONTH_ABBREV, parse_month_abbrev),
            (&*DATE_YMD, parse_ymd),
            (&*DATE_DMY, parse_dmy),
        ];

        formats
            .iter()
            .find_map(|(pattern, parse)| {
                pattern
                    .captures(receipt.text())
                    .map(|caps| parse(&caps))
            })
            .flatten()
    }
}

// "mar 15, 2024"
fn parse_month_abbrev(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = month_abbrev_to_number(&caps[1]);
    let day: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month, day)
}

// "2024-03-15"
fn parse_ymd(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month, day)
}

// "15/03/2024", day before month
fn parse_dmy(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_abbrev_to_number(abbrev: &str) -> u32 {
    match abbrev.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

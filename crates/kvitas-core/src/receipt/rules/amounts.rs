//! Total amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::receipt::NormalizedReceipt;

use super::patterns::AMOUNT_PATTERN;
use super::FieldExtractor;

/// Extracts the best-guess total from receipt text.
///
/// Receipts conventionally print the total near the bottom, after the
/// subtotal, so the line scan runs in reverse and a line containing
/// "subtotal" never qualifies as the total line. When no total line yields
/// an amount, the largest amount anywhere in the text is used instead.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First monetary pattern in a single line.
    fn first_amount(line: &str) -> Option<Decimal> {
        AMOUNT_PATTERN
            .captures_iter(line)
            .find_map(|caps| parse_amount(&caps[1], &caps[2]))
    }

    /// Largest monetary pattern anywhere in the text.
    fn max_amount(text: &str) -> Option<Decimal> {
        AMOUNT_PATTERN
            .captures_iter(text)
            .filter_map(|caps| parse_amount(&caps[1], &caps[2]))
            .max()
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, receipt: &NormalizedReceipt) -> Option<Decimal> {
        let total_line = receipt
            .lines()
            .rev()
            .find(|line| line.contains("total") && !line.contains("subtotal"));

        total_line
            .and_then(Self::first_amount)
            .or_else(|| Self::max_amount(receipt.text()))
    }
}

fn parse_amount(integer_part: &str, decimal_part: &str) -> Option<Decimal> {
    Decimal::from_str(&format!("{}.{}", integer_part, decimal_part)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<Decimal> {
        AmountExtractor::new().extract(&NormalizedReceipt::new(text))
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_line_wins_over_other_amounts() {
        let text = "coffee 3.50\nmuffin 4.25\ntotal: 12.34";
        assert_eq!(extract(text), Some(dec("12.34")));
    }

    #[test]
    fn test_subtotal_line_never_qualifies() {
        assert_eq!(extract("subtotal: 9.00\ntotal: 12.34"), Some(dec("12.34")));
    }

    #[test]
    fn test_reverse_scan_picks_last_total_line() {
        assert_eq!(extract("total: 5.00\ntotal: 12.34"), Some(dec("12.34")));
    }

    #[test]
    fn test_max_fallback_without_total_line() {
        assert_eq!(extract("3.50\n44.00\n12.10"), Some(dec("44.00")));
    }

    #[test]
    fn test_total_line_without_amount_falls_back_to_max() {
        assert_eq!(extract("9.99\ntotal due"), Some(dec("9.99")));
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(extract("total: €12.34"), Some(dec("12.34")));
        assert_eq!(extract("$7.99"), Some(dec("7.99")));
    }

    #[test]
    fn test_no_amount_anywhere() {
        assert_eq!(extract("thanks for visiting"), None);
    }

    #[test]
    fn test_source_precision_preserved() {
        assert_eq!(extract("total: 44.00").unwrap().to_string(), "44.00");
    }
}

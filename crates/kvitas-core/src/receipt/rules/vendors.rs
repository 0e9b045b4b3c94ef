//! Vendor keyword classification.

use crate::receipt::NormalizedReceipt;

use super::FieldExtractor;

/// A single vendor classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorRule {
    /// Display name used to build the expense title.
    pub vendor: &'static str,
    /// Substrings that identify the vendor in receipt text.
    pub keywords: &'static [&'static str],
    /// Expense category assigned on a match.
    pub category: &'static str,
}

impl VendorRule {
    /// Expense title for this vendor, e.g. "Uber Purchase".
    pub fn title(&self) -> String {
        format!("{} Purchase", self.vendor)
    }
}

/// Known vendors, in priority order. Earlier rules win.
pub static VENDOR_RULES: &[VendorRule] = &[
    VendorRule {
        vendor: "Uber",
        keywords: &["uber"],
        category: "Travel",
    },
    VendorRule {
        vendor: "Amazon",
        keywords: &["amazon", "amzn", "order #"],
        category: "Shopping",
    },
    VendorRule {
        vendor: "Google",
        keywords: &["google"],
        category: "Software",
    },
    VendorRule {
        vendor: "Starbucks",
        keywords: &["starbucks"],
        category: "Food & Drink",
    },
    VendorRule {
        vendor: "Maxima",
        keywords: &["maxima"],
        category: "Groceries",
    },
    VendorRule {
        vendor: "Iki",
        keywords: &["iki"],
        category: "Groceries",
    },
];

/// Classifies a receipt against the static vendor rule table.
///
/// Rules are evaluated in table order with early exit; a rule matches when
/// any of its keywords occurs as a substring anywhere in the text.
pub struct VendorClassifier;

impl VendorClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VendorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VendorClassifier {
    type Output = &'static VendorRule;

    fn extract(&self, receipt: &NormalizedReceipt) -> Option<&'static VendorRule> {
        let text = receipt.text();
        VENDOR_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<&'static VendorRule> {
        VendorClassifier::new().extract(&NormalizedReceipt::new(text))
    }

    #[test]
    fn test_vendor_match() {
        let rule = classify("UBER TRIP HELP.UBER.COM").unwrap();
        assert_eq!(rule.title(), "Uber Purchase");
        assert_eq!(rule.category, "Travel");
    }

    #[test]
    fn test_rule_order_decides_ties() {
        // Both Uber and Amazon keywords occur; Uber is listed first.
        let rule = classify("amazon order via uber delivery").unwrap();
        assert_eq!(rule.vendor, "Uber");
    }

    #[test]
    fn test_characteristic_phrase_keyword() {
        let rule = classify("your order #112-99 has shipped").unwrap();
        assert_eq!(rule.vendor, "Amazon");
        assert_eq!(rule.category, "Shopping");
    }

    #[test]
    fn test_keyword_matches_anywhere_in_text() {
        let rule = classify("paid at iki store vilnius").unwrap();
        assert_eq!(rule.category, "Groceries");
    }

    #[test]
    fn test_no_rule_matches() {
        assert_eq!(classify("corner bakery, cash sale"), None);
    }
}

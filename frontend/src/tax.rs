//! UAE corporate tax estimate: 0% up to [`TAX_THRESHOLD`], [`TAX_RATE`] above it.
//!
//! The arithmetic is locale independent. Only [`format_aed`] looks at the
//! locale, and only for display.

use log::{debug, warn};
use thiserror::Error;

use crate::config::{TAX_RATE, TAX_THRESHOLD};
use crate::i18n::Locale;

#[derive(Debug, Error, PartialEq)]
pub enum ParseAmountError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },
    #[error("'{input}' is negative")]
    Negative { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    pub total_profit: f64,
    pub exempt_amount: f64,
    pub taxable_amount: f64,
    pub tax_due: f64,
}

impl TaxBreakdown {
    pub fn for_profit(total_profit: f64) -> Self {
        let exempt_amount = total_profit.min(TAX_THRESHOLD);
        let taxable_amount = (total_profit - TAX_THRESHOLD).max(0.0);
        Self {
            total_profit,
            exempt_amount,
            taxable_amount,
            tax_due: taxable_amount * TAX_RATE,
        }
    }
}

/// Rewrites Arabic-Indic digits and separators to ASCII and drops thousands
/// separators and spaces.
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter_map(|c| match c {
            ',' | '\u{066C}' | ' ' | '\u{00A0}' | '\u{202F}' => None,
            '\u{066B}' => Some('.'),
            '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10),
            '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10),
            _ => Some(c),
        })
        .collect()
}

/// Parses a profit amount typed by the user.
///
/// Returns `Ok(None)` for empty input (the user has not typed anything yet).
pub fn parse_amount(s: &str) -> Result<Option<f64>, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    // f64::from_str accepts "inf" and "NaN", which are not amounts.
    let amount = normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseAmountError::NotANumber { input: s.to_string() })?;
    if amount < 0.0 {
        return Err(ParseAmountError::Negative { input: s.to_string() });
    }
    Ok(Some(amount))
}

pub fn estimate(input: &str) -> Option<TaxBreakdown> {
    match parse_amount(input) {
        Ok(amount) => amount.map(TaxBreakdown::for_profit),
        Err(e) => {
            warn!("Ignoring tax input: {}", e);
            None
        }
    }
}

/// Input and last result of the calculator view.
///
/// The result only changes on [`TaxEstimator::calculate`]. Invalid input keeps
/// the previous result on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxEstimator {
    input: String,
    result: Option<TaxBreakdown>,
}

impl TaxEstimator {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&TaxBreakdown> {
        self.result.as_ref()
    }

    /// Accepts an edit unless it would make the value negative.
    /// Returns whether the edit was taken.
    pub fn set_input(&mut self, raw: &str) -> bool {
        if raw.trim_start().starts_with('-') {
            debug!("Rejected negative tax input");
            return false;
        }
        self.input = raw.to_string();
        true
    }

    pub fn calculate(&mut self) {
        if let Some(breakdown) = estimate(&self.input) {
            debug!("Tax estimate for {}: {}", breakdown.total_profit, breakdown.tax_due);
            self.result = Some(breakdown);
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats an amount in dirhams with two decimals and grouped thousands.
pub fn format_aed(amount: f64, locale: Locale) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    let number = format!("{}{}.{}", sign, group_thousands(whole), frac);
    match locale {
        Locale::En => format!("AED {}", number),
        Locale::Ar => format!("{} د.إ", number),
    }
}

pub fn format_rate(rate: f64) -> String {
    let percent = rate * 100.0;
    if percent.fract().abs() < 1e-9 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn five_hundred_thousand() {
        let b = estimate("500000").unwrap();
        assert_eq!(b.exempt_amount, 375_000.0);
        assert_eq!(b.taxable_amount, 125_000.0);
        assert!(close(b.tax_due, 11_250.0));
    }

    #[test]
    fn threshold_is_fully_exempt() {
        let b = estimate("375000").unwrap();
        assert_eq!(b.tax_due, 0.0);
        assert_eq!(b.taxable_amount, 0.0);
        assert_eq!(b.exempt_amount, 375_000.0);
    }

    #[test]
    fn below_threshold_owes_nothing() {
        for amount in [0.0, 1.0, 12_345.67, 374_999.99, 375_000.0] {
            let b = TaxBreakdown::for_profit(amount);
            assert_eq!(b.tax_due, 0.0, "{amount}");
            assert_eq!(b.exempt_amount, amount, "{amount}");
        }
    }

    #[test]
    fn above_threshold_taxed_at_rate() {
        for amount in [375_000.01, 400_000.0, 1_000_000.0, 98_765_432.1] {
            let b = TaxBreakdown::for_profit(amount);
            assert!(close(b.tax_due, (amount - 375_000.0) * 0.09), "{amount}");
            assert_eq!(b.exempt_amount, 375_000.0);
        }
    }

    #[test]
    fn tax_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..200 {
            let due = TaxBreakdown::for_profit(step as f64 * 5_000.0).tax_due;
            assert!(due >= previous);
            previous = due;
        }
    }

    #[test]
    fn parse_strips_thousands_separators() {
        assert_eq!(parse_amount("1,250,000"), Ok(Some(1_250_000.0)));
        assert_eq!(parse_amount(" 500 000.50 "), Ok(Some(500_000.5)));
    }

    #[test]
    fn parse_accepts_arabic_indic_digits() {
        assert_eq!(parse_amount("٥٠٠٬٠٠٠"), Ok(Some(500_000.0)));
        assert_eq!(parse_amount("١٢٫٥"), Ok(Some(12.5)));
        assert_eq!(parse_amount("۴۰۰"), Ok(Some(400.0)));
    }

    #[test]
    fn parse_empty_is_not_an_error() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("   "), Ok(None));
        assert_eq!(estimate(""), None);
    }

    #[test]
    fn parse_rejects_garbage_and_negatives() {
        assert!(matches!(parse_amount("not a number"), Err(ParseAmountError::NotANumber { .. })));
        assert!(matches!(parse_amount("inf"), Err(ParseAmountError::NotANumber { .. })));
        assert!(matches!(parse_amount("NaN"), Err(ParseAmountError::NotANumber { .. })));
        assert!(matches!(parse_amount("-5"), Err(ParseAmountError::Negative { .. })));
        assert_eq!(estimate("not a number"), None);
    }

    #[test]
    fn invalid_input_keeps_previous_result() {
        let mut est = TaxEstimator::default();
        assert!(est.set_input("500000"));
        est.calculate();
        let before = est.result().copied();
        assert!(before.is_some());

        assert!(est.set_input("not a number"));
        est.calculate();
        assert_eq!(est.result().copied(), before);

        assert!(est.set_input(""));
        est.calculate();
        assert_eq!(est.result().copied(), before);
    }

    #[test]
    fn result_only_changes_on_calculate() {
        let mut est = TaxEstimator::default();
        est.set_input("400000");
        assert_eq!(est.result(), None);
        est.calculate();
        est.set_input("900000");
        assert_eq!(est.result().map(|b| b.total_profit), Some(400_000.0));
    }

    #[test]
    fn negative_keystroke_is_rejected() {
        let mut est = TaxEstimator::default();
        est.set_input("12");
        assert!(!est.set_input("-12"));
        assert_eq!(est.input(), "12");
    }

    #[test]
    fn formats_dirhams_per_locale() {
        assert_eq!(format_aed(11_250.0, Locale::En), "AED 11,250.00");
        assert_eq!(format_aed(1_234_567.891, Locale::En), "AED 1,234,567.89");
        assert_eq!(format_aed(0.0, Locale::En), "AED 0.00");
        assert_eq!(format_aed(999.999, Locale::Ar), "1,000.00 د.إ");
    }

    #[test]
    fn formats_rate_as_percent() {
        assert_eq!(format_rate(0.09), "9%");
        assert_eq!(format_rate(0.125), "12.5%");
    }
}

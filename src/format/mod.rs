//! Display formatting for amounts, percentages and dates
//!
//! Output follows Vietnamese conventions by default (`10.000.000 ₫`).
//! Formatting never depends on the host locale.

mod date;

pub use date::{format_date_millis, format_date_str};

use serde::{Deserialize, Serialize};

/// Placeholder shown for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// Separators and currency symbol used when rendering numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub currency_symbol: String,
    /// Maximum fraction digits for plain numbers (trailing zeros trimmed)
    pub max_fraction_digits: usize,
    /// Fraction digits shown for currency amounts
    pub currency_fraction_digits: usize,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::vi_vn()
    }
}

impl NumberLocale {
    /// vi-VN: dot grouping, comma decimals, dong without minor units
    pub fn vi_vn() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            currency_symbol: "₫".to_string(),
            max_fraction_digits: 3,
            currency_fraction_digits: 0,
        }
    }

    /// Grouped number with up to `max_fraction_digits` decimals
    pub fn format_number(&self, value: f64) -> String {
        let rendered = self.render(value, self.max_fraction_digits);
        self.trim_fraction(rendered)
    }

    /// Grouped amount followed by a non-breaking space and the currency symbol
    pub fn format_currency(&self, amount: f64) -> String {
        format!(
            "{}\u{a0}{}",
            self.render(amount, self.currency_fraction_digits),
            self.currency_symbol
        )
    }

    fn render(&self, value: f64, fraction_digits: usize) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }

        let fixed = format!("{:.*}", fraction_digits, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
        // "-0" would otherwise show up for tiny negatives
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn trim_fraction(&self, rendered: String) -> String {
        match rendered.split_once(self.decimal_separator) {
            Some((integer, fraction)) => {
                let fraction = fraction.trim_end_matches('0');
                if fraction.is_empty() {
                    integer.to_string()
                } else {
                    format!("{}{}{}", integer, self.decimal_separator, fraction)
                }
            }
            None => rendered,
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Thousands-separated number in the default locale, e.g. `1.234.567,5`
pub fn format_grouped_number(amount: f64) -> String {
    NumberLocale::default().format_number(amount)
}

/// Currency display in the default locale, e.g. `10.000.000 ₫`
pub fn format_currency_display(amount: f64) -> String {
    NumberLocale::default().format_currency(amount)
}

/// Grouped number, or `N/A` when the value is missing
pub fn format_optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_grouped_number)
}

/// Signed percentage with two decimals: `+12.34%`, `-1.50%`, `0.00%`
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            if v > 0.0 {
                format!("+{:.2}%", v)
            } else {
                format!("{:.2}%", v)
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_number() {
        assert_eq!(format_grouped_number(10_000_000.0), "10.000.000");
        assert_eq!(format_grouped_number(0.0), "0");
        assert_eq!(format_grouped_number(123.0), "123");
        assert_eq!(format_grouped_number(1_234_567_890.0), "1.234.567.890");
    }

    #[test]
    fn test_grouped_number_fraction() {
        assert_eq!(format_grouped_number(1_234.5), "1.234,5");
        assert_eq!(format_grouped_number(0.12345), "0,123");
        assert_eq!(format_grouped_number(-1_000.25), "-1.000,25");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency_display(10_000_000.0), "10.000.000\u{a0}₫");
        assert_eq!(format_currency_display(0.0), "0\u{a0}₫");
        assert_eq!(format_currency_display(1_000_000_000.0), "1.000.000.000\u{a0}₫");
        assert_eq!(format_currency_display(-5_000_000.0), "-5.000.000\u{a0}₫");
    }

    #[test]
    fn test_currency_rounds_minor_units() {
        assert_eq!(format_currency_display(1_999.6), "2.000\u{a0}₫");
        assert_eq!(format_currency_display(-0.2), "0\u{a0}₫");
    }

    #[test]
    fn test_custom_locale() {
        let locale = NumberLocale {
            thousands_separator: ',',
            decimal_separator: '.',
            currency_symbol: "$".to_string(),
            max_fraction_digits: 2,
            currency_fraction_digits: 2,
        };
        assert_eq!(locale.format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(locale.format_currency(1_234.5), "1,234.50\u{a0}$");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(Some(12.3456)), "+12.35%");
        assert_eq!(format_percentage(Some(-1.5)), "-1.50%");
        assert_eq!(format_percentage(Some(0.0)), "0.00%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn test_optional_number() {
        assert_eq!(format_optional_number(Some(25_430.12)), "25.430,12");
        assert_eq!(format_optional_number(None), "N/A");
    }
}

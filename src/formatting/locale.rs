//! Locale-aware number rendering for the calculator and its reports.
//!
//! The reference locale is `en-IN`: the rupee symbol, no decimals for money,
//! and Indian digit grouping (the last three digits form one group, every
//! group above that has two digits: `1,00,000`). Western grouping is
//! available for configurations that want `100,000`.
//!
//! Rounding is half away from zero everywhere (`f64::round`), which matches
//! the `halfExpand` default of locale number formatting. Rounding is cosmetic
//! and never fed back into a calculation.
//!
//! Non-finite values (an ROI with a zero campaign cost) render as
//! [`UNDEFINED_LITERAL`] in every format.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Rendering of any infinite or NaN value.
pub const UNDEFINED_LITERAL: &str = "N/A";

/// 2^53
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,56,789
    #[default]
    Indian,
    /// 123,456,789
    Western,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    pub currency_symbol: String,
    pub grouping: Grouping,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl NumberLocale {
    pub fn new(currency_symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            grouping,
        }
    }

    /// Symbol-prefixed whole currency amount, e.g. `₹1,00,000` or `-₹20,000`.
    pub fn format_currency(&self, value: f64) -> String {
        if !value.is_finite() {
            return UNDEFINED_LITERAL.to_string();
        }
        let rounded = round_whole(value);
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.currency_symbol,
            group_digits(&format!("{:.0}", rounded.abs()), self.grouping)
        )
    }

    /// Fraction rendered as a percentage with two decimals: `0.2` -> `20.00%`.
    pub fn format_percentage(&self, fraction: f64) -> String {
        if !fraction.is_finite() {
            return UNDEFINED_LITERAL.to_string();
        }
        // past 2^53 every f64 is an integer, so the percent digits are exact
        // and scaling by 10,000 could overflow
        if fraction.abs() >= MAX_EXACT_INTEGER {
            let sign = if fraction < 0.0 { "-" } else { "" };
            let whole = format!("{:.0}00", fraction.abs());
            return format!("{}{}.00%", sign, group_digits(&whole, self.grouping));
        }

        let hundredths = normalize_zero((fraction * 10_000.0).round());
        let percent = hundredths / 100.0;
        let sign = if percent < 0.0 { "-" } else { "" };
        let text = format!("{:.2}", percent.abs());
        let (whole, decimals) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        format!("{}{}.{}%", sign, group_digits(whole, self.grouping), decimals)
    }

    /// Whole number with grouping separators and no symbol.
    pub fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return UNDEFINED_LITERAL.to_string();
        }
        let rounded = round_whole(value);
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{}{}",
            sign,
            group_digits(&format!("{:.0}", rounded.abs()), self.grouping)
        )
    }

    pub fn format_count(&self, value: u64) -> String {
        group_digits(&value.to_string(), self.grouping)
    }
}

/// Date only, day/month/year without zero padding (`15/10/2026`).
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

fn round_whole(value: f64) -> f64 {
    normalize_zero(value.round())
}

// -0.0 would otherwise print as "-0"
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Insert separators into a string of ASCII digits.
fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let width = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups = Vec::with_capacity(head.len() / width + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

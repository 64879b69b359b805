//! Currency formatting: full-precision amounts for tooltips and compact k/L/cr labels for axis ticks.
//!
//! Grouping follows the Indian system (lakh = 1,00,000; crore = 1,00,00,000), which is what the
//! compact ladder abbreviates.

use num_format::{Locale, ToFormattedString};

/// Placeholder shown for a missing amount.
pub const MISSING_PLACEHOLDER: &str = "—";

/// Currency symbol prefixed to full-precision amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

const THOUSAND: f64 = 1.0e3;
const LAKH: f64 = 1.0e5;
const CRORE: f64 = 1.0e7;
const WHOLE_ONLY_ABOVE: f64 = 1.0e15;

/// Format an amount with lakh/crore digit grouping and up to two fractional digits.
///
/// `None` (and NaN/infinite input) yields [`MISSING_PLACEHOLDER`]. Trailing fractional zeros are
/// dropped, so `1234.50` renders as `₹1,234.5` and `100.0` as `₹100`.
pub fn format_currency_full(n: Option<f64>) -> String {
    let Some(v) = n.filter(|v| v.is_finite()) else {
        return MISSING_PLACEHOLDER.to_string();
    };

    // past this magnitude f64 carries no cent digits and u64 cents would saturate
    if v.abs() >= WHOLE_ONLY_ABOVE {
        let sign = if v < 0.0 { "-" } else { "" };
        let whole = group_indian(&format!("{:.0}", v.abs()));
        return format!("{sign}{CURRENCY_SYMBOL}{whole}");
    }

    let cents = (v.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en_IN);
    let frac = cents % 100;
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };

    if frac == 0 {
        format!("{sign}{CURRENCY_SYMBOL}{whole}")
    } else {
        let digits = format!("{frac:02}");
        format!(
            "{sign}{CURRENCY_SYMBOL}{whole}.{}",
            digits.trim_end_matches('0')
        )
    }
}

/// Lakh/crore grouping of a plain digit string: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    let split = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(split);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !head.is_empty() {
        out.push(',');
    }
    out.push_str(tail);
    out
}

/// Abbreviate an amount for axis ticks: `cr` (≥ 1e7), `L` (≥ 1e5), `k` (≥ 1e3), else a bare integer.
///
/// Suffixed forms always carry exactly one decimal (`1.0cr`, `2.5L`). Negative amounts never
/// reach a suffix branch.
pub fn format_currency_compact(n: f64) -> String {
    let n = if n.is_finite() { n } else { 0.0 };
    if n >= CRORE {
        format!("{:.1}cr", round_one_decimal(n / CRORE))
    } else if n >= LAKH {
        format!("{:.1}L", round_one_decimal(n / LAKH))
    } else if n >= THOUSAND {
        format!("{:.1}k", round_one_decimal(n / THOUSAND))
    } else {
        // `+ 0.0` turns a rounded -0 into 0
        format!("{:.0}", n.round() + 0.0)
    }
}

/// Round half away from zero at one decimal, so `1.25` becomes `1.3` rather than banker's `1.2`.
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_one_decimal(1.25), 1.3);
        assert_eq!(round_one_decimal(99.999), 100.0);
    }

    #[test]
    fn fraction_rounding_carries_into_whole_part() {
        assert_eq!(format_currency_full(Some(1234.999)), "₹1,235");
        assert_eq!(format_currency_full(Some(-0.001)), "₹0");
    }

    #[test]
    fn indian_grouping_of_digit_strings() {
        assert_eq!(group_indian("7"), "7");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
        assert_eq!(
            group_indian(&1_000_000_000_000_000u64.to_string()),
            1_000_000_000_000_000u64.to_formatted_string(&Locale::en_IN)
        );
    }
}

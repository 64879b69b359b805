use expense_charts::format::MISSING_PLACEHOLDER;
use expense_charts::{format_currency_compact, format_currency_full};

#[test]
fn compact_examples() {
    assert_eq!(format_currency_compact(15_000_000.0), "1.5cr");
    assert_eq!(format_currency_compact(250_000.0), "2.5L");
    assert_eq!(format_currency_compact(4_200.0), "4.2k");
    assert_eq!(format_currency_compact(999.0), "999");
}

#[test]
fn compact_ladder_boundaries() {
    // Each suffix starts exactly at its threshold.
    assert_eq!(format_currency_compact(999.0), "999");
    assert_eq!(format_currency_compact(1_000.0), "1.0k");
    assert_eq!(format_currency_compact(99_999.0), "100.0k");
    assert_eq!(format_currency_compact(100_000.0), "1.0L");
    assert_eq!(format_currency_compact(9_999_999.0), "100.0L");
    assert_eq!(format_currency_compact(10_000_000.0), "1.0cr");
}

#[test]
fn compact_small_and_degenerate_values() {
    assert_eq!(format_currency_compact(0.0), "0");
    assert_eq!(format_currency_compact(75.4), "75");
    assert_eq!(format_currency_compact(f64::NAN), "0");
    assert_eq!(format_currency_compact(f64::INFINITY), "0");
    // negatives never take a suffix
    assert_eq!(format_currency_compact(-5_000.0), "-5000");
}

#[test]
fn compact_rounds_half_away_from_zero() {
    assert_eq!(format_currency_compact(225_000.0), "2.3L");
    assert_eq!(format_currency_compact(1_250.0), "1.3k");
}

#[test]
fn full_uses_lakh_crore_grouping() {
    assert_eq!(format_currency_full(Some(123_456.78)), "₹1,23,456.78");
    assert_eq!(format_currency_full(Some(12_345_678.0)), "₹1,23,45,678");
    assert_eq!(format_currency_full(Some(999.0)), "₹999");
}

#[test]
fn full_trims_fraction() {
    assert_eq!(format_currency_full(Some(100.0)), "₹100");
    assert_eq!(format_currency_full(Some(1_234.5)), "₹1,234.5");
    assert_eq!(format_currency_full(Some(0.05)), "₹0.05");
}

#[test]
fn full_handles_missing_and_negative() {
    assert_eq!(format_currency_full(None), MISSING_PLACEHOLDER);
    assert_eq!(format_currency_full(Some(f64::NAN)), MISSING_PLACEHOLDER);
    assert_eq!(format_currency_full(Some(-50.0)), "-₹50");
}

#[test]
fn huge_amounts_do_not_saturate() {
    assert_eq!(format_currency_full(Some(1e18)), "₹10,00,00,00,00,00,00,00,000");
    assert_eq!(
        format_currency_full(Some(-1e20)),
        "-₹10,00,00,00,00,00,00,00,00,000"
    );
    assert_ne!(
        format_currency_full(Some(1e18)),
        format_currency_full(Some(1e20))
    );
    assert_eq!(format_currency_full(Some(1e15)), "₹1,00,00,00,00,00,00,000");
    assert_eq!(format_currency_full(Some(12_345_678_901.25)), "₹12,34,56,78,901.25");

    assert_eq!(format_currency_compact(-1e20), "-100000000000000000000");
    assert_eq!(format_currency_compact(-0.4), "0");
    assert_eq!(format_currency_compact(2.5), "3");
}

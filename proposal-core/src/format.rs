//! Display formatting for stamped document values.
//!
//! These helpers shape raw engine output into the strings the proposal
//! template expects. They format and parse only; nothing here touches a
//! file or a page.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Ratios at or above this display as exactly 100%. Business convention:
/// a markup that is 99.95% of the way there reads as "100%" on paper.
/// Preserve the literal; do not tidy it to 1.
const FULL_PERCENT_THRESHOLD: Decimal = Decimal::from_parts(9995, 0, 0, false, 4);

/// Date layouts accepted from draft metadata, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Parses a draft date string. Returns `None` for blank or unrecognized
/// input rather than failing; the caller substitutes its missing-value
/// sentinel.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(cleaned, layout).ok())
}

/// Formats a dollar amount as `$1,234.56`, half-up quantized to cents.
pub fn format_currency(value: Decimal) -> String {
    let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let unsigned = cents.abs();
    let whole = unsigned.trunc();
    let fraction = unsigned - whole;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // Python's ${:,.2f} keeps the sign inside the dollar sign.
    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    let cents_part = (fraction * Decimal::from(100))
        .round()
        .to_u32()
        .unwrap_or(0);
    format!("${sign}{grouped}.{cents_part:02}")
}

/// Cover-page date style: `AUGUST 04, 2025`.
pub fn format_date_cover(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string().to_uppercase()
}

/// Plan-set date style: `August 4, 2025`.
pub fn format_date_plan(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a ratio as a whole percent (`0.35` → `"35%"`), treating
/// anything at or above [`FULL_PERCENT_THRESHOLD`] as exactly 100%.
pub fn format_percent(ratio: Decimal) -> String {
    if ratio >= FULL_PERCENT_THRESHOLD {
        return "100%".to_string();
    }
    let percent = (ratio * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent}%")
}

//! Margin ratios and pass/fail checks against configured thresholds.

use rust_decimal::Decimal;

use crate::models::{MarginChecks, MarginThresholds, Margins};

/// Profitability ratio `(revenue - cost) / revenue`.
///
/// Returns exactly zero when `revenue <= 0`, regardless of cost. A zero
/// or negative revenue line has no meaningful margin, and zero is the
/// silent default this engine prefers over an error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::margins::margin;
///
/// assert_eq!(margin(dec!(1500), dec!(1000)), dec!(1) / dec!(3));
/// assert_eq!(margin(dec!(0), dec!(500)), dec!(0));
/// assert_eq!(margin(dec!(-100), dec!(500)), dec!(0));
/// ```
pub fn margin(revenue: Decimal, cost: Decimal) -> Decimal {
    if revenue > Decimal::ZERO {
        (revenue - cost) / revenue
    } else {
        Decimal::ZERO
    }
}

/// Evaluates every margin against its (normalized) threshold.
///
/// The comparison is strict: a margin exactly equal to its threshold
/// fails the check.
pub fn evaluate_checks(margins: &Margins, thresholds: &MarginThresholds) -> MarginChecks {
    let bounds = thresholds.normalized();
    MarginChecks {
        product_ok: margins.product_margin > bounds.product_min,
        install_ok: margins.install_margin > bounds.install_min,
        project_ok: margins.project_margin > bounds.project_min,
    }
}

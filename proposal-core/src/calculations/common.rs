//! Numeric normalization primitives shared by every estimate rollup.
//!
//! The engine never fails on malformed input: unparseable strings degrade
//! to zero so an incomplete draft mid-edit still prices (wrongly, but
//! silently). Degraded non-empty input is logged at WARN so suspicious
//! zero totals can be traced back.

use rust_decimal::Decimal;

/// Parses a loosely-formatted user string into a [`Decimal`].
///
/// Strips every character except ASCII digits and `.`; a `-` survives
/// only in leading position. Empty or unparseable input yields zero,
/// never an error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::common::to_decimal;
///
/// assert_eq!(to_decimal("$1,234.50"), dec!(1234.50));
/// assert_eq!(to_decimal("  -42 "), dec!(-42));
/// assert_eq!(to_decimal(""), dec!(0));
/// assert_eq!(to_decimal("n/a"), dec!(0));
/// assert_eq!(to_decimal("1.2.3"), dec!(0));
/// ```
pub fn to_decimal(raw: &str) -> Decimal {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || c == '.' {
            cleaned.push(c);
        } else if c == '-' && cleaned.is_empty() {
            cleaned.push(c);
        }
    }

    if cleaned.is_empty() || cleaned == "-" {
        return Decimal::ZERO;
    }

    cleaned.parse().unwrap_or_else(|_| {
        tracing::warn!(input = %raw, "unparseable numeric input degraded to zero");
        Decimal::ZERO
    })
}

/// Rounds away from zero to the next whole dollar: ceiling for
/// non-negative values, floor for negative ones.
///
/// Applied at every customer-facing rollup (never on raw cost bases) so
/// rounding always lands in the house's favor.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::common::round_up;
///
/// assert_eq!(round_up(dec!(1500.01)), dec!(1501));
/// assert_eq!(round_up(dec!(1500)), dec!(1500));
/// assert_eq!(round_up(dec!(-10.2)), dec!(-11));
/// ```
pub fn round_up(value: Decimal) -> Decimal {
    if value >= Decimal::ZERO {
        value.ceil()
    } else {
        value.floor()
    }
}

/// Left-fold addition; an empty iterator sums to zero.
pub fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // to_decimal tests
    // =========================================================================

    #[test]
    fn to_decimal_parses_plain_numbers() {
        assert_eq!(to_decimal("1000"), dec!(1000));
        assert_eq!(to_decimal("7.71"), dec!(7.71));
    }

    #[test]
    fn to_decimal_strips_currency_punctuation() {
        assert_eq!(to_decimal("$12,500.75"), dec!(12500.75));
    }

    #[test]
    fn to_decimal_keeps_only_a_leading_minus() {
        assert_eq!(to_decimal("-250"), dec!(-250));
        assert_eq!(to_decimal("3-5"), dec!(35));
        assert_eq!(to_decimal("  -42"), dec!(-42));
    }

    #[test]
    fn to_decimal_empty_input_is_zero() {
        assert_eq!(to_decimal(""), dec!(0));
        assert_eq!(to_decimal("   "), dec!(0));
    }

    #[test]
    fn to_decimal_digitless_input_is_zero() {
        assert_eq!(to_decimal("abc"), dec!(0));
        assert_eq!(to_decimal("n/a"), dec!(0));
        assert_eq!(to_decimal("-"), dec!(0));
        assert_eq!(to_decimal("TBD"), dec!(0));
    }

    #[test]
    fn to_decimal_multiple_dots_degrade_to_zero() {
        assert_eq!(to_decimal("1.2.3"), dec!(0));
    }

    // =========================================================================
    // round_up tests
    // =========================================================================

    #[test]
    fn round_up_ceils_positive_values() {
        assert_eq!(round_up(dec!(1.01)), dec!(2));
        assert_eq!(round_up(dec!(1499.999)), dec!(1500));
    }

    #[test]
    fn round_up_preserves_whole_values() {
        assert_eq!(round_up(dec!(1500)), dec!(1500));
        assert_eq!(round_up(dec!(0)), dec!(0));
    }

    #[test]
    fn round_up_floors_negative_values() {
        assert_eq!(round_up(dec!(-1.01)), dec!(-2));
        assert_eq!(round_up(dec!(-10)), dec!(-10));
    }

    #[test]
    fn round_up_never_moves_toward_zero() {
        for value in [dec!(0.001), dec!(17.5), dec!(848.1)] {
            assert!(round_up(value) >= value);
        }
        for value in [dec!(-0.001), dec!(-17.5)] {
            assert!(round_up(value) <= value);
        }
    }

    // =========================================================================
    // sum tests
    // =========================================================================

    #[test]
    fn sum_folds_left() {
        assert_eq!(sum([dec!(1), dec!(2.5), dec!(-0.5)]), dec!(3));
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(sum(Vec::<Decimal>::new()), dec!(0));
    }
}

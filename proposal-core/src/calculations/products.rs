//! Product pricing: per-line sell prices and the unrounded cost base.

use rust_decimal::Decimal;

use crate::calculations::common::{round_up, sum, to_decimal};
use crate::models::{CalculatorInputs, EuroPricing, ProductItem};

/// Where a product line's base price comes from.
///
/// Resolved once per product so the pricing branch is exhaustive: either
/// the flat USD price the user typed, or the USD-converted subtotal of a
/// foreign-currency sub-ledger, which supersedes the flat price outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingSource {
    Flat(Decimal),
    Converted {
        subtotal_eur: Decimal,
        applied_rate: Decimal,
    },
}

impl PricingSource {
    /// Resolves the pricing source for one product.
    pub fn resolve(product: &ProductItem) -> Self {
        match &product.euro_pricing {
            Some(ledger) => PricingSource::Converted {
                subtotal_eur: euro_subtotal(ledger),
                applied_rate: ledger.applied_rate(),
            },
            None => PricingSource::Flat(to_decimal(&product.price)),
        }
    }

    /// The USD base price this source yields.
    pub fn base_price(&self) -> Decimal {
        match self {
            PricingSource::Flat(price) => *price,
            PricingSource::Converted {
                subtotal_eur,
                applied_rate,
            } => subtotal_eur * applied_rate,
        }
    }
}

fn euro_subtotal(ledger: &EuroPricing) -> Decimal {
    sum(ledger.sections.iter().map(|section| to_decimal(&section.amount)))
}

/// One priced product line, retained for auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedProduct {
    pub name: String,
    /// Unrounded base price (true cost).
    pub base_price: Decimal,
    /// Effective markup rate applied to this line.
    pub markup: Decimal,
    /// Customer-facing sell price, rounded up.
    pub sell_price: Decimal,
}

/// Totals across all product lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPricing {
    pub lines: Vec<PricedProduct>,
    /// Sum of rounded sell prices: the contract's product component.
    pub sell_total: Decimal,
    /// Sum of unrounded base prices. Margin is computed against this,
    /// not the rounded sell figure.
    pub cost_base: Decimal,
}

/// Prices every product line.
///
/// A line's markup is its own `markup` string when non-blank, else the
/// calculator's `product_markup_default`. Sell price per line is
/// `round_up(base × (1 + markup))`.
pub fn resolve(products: &[ProductItem], calculator: &CalculatorInputs) -> ProductPricing {
    let default_markup = to_decimal(&calculator.product_markup_default);

    let mut pricing = ProductPricing::default();
    for product in products {
        let base_price = PricingSource::resolve(product).base_price();
        let markup = if product.markup.trim().is_empty() {
            default_markup
        } else {
            to_decimal(&product.markup)
        };
        let sell_price = round_up(base_price * (Decimal::ONE + markup));

        pricing.sell_total += sell_price;
        pricing.cost_base += base_price;
        pricing.lines.push(PricedProduct {
            name: product.name.clone(),
            base_price,
            markup,
            sell_price,
        });
    }

    pricing
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::EuroSection;

    use super::*;

    fn product(price: &str, markup: &str) -> ProductItem {
        ProductItem {
            name: "W-1".to_string(),
            price: price.to_string(),
            markup: markup.to_string(),
            ..ProductItem::default()
        }
    }

    fn calculator_with_default_markup(markup: &str) -> CalculatorInputs {
        CalculatorInputs {
            product_markup_default: markup.to_string(),
            ..CalculatorInputs::default()
        }
    }

    // =========================================================================
    // PricingSource tests
    // =========================================================================

    #[test]
    fn flat_source_uses_the_typed_price() {
        let source = PricingSource::resolve(&product("1000", "0.5"));

        assert_eq!(source, PricingSource::Flat(dec!(1000)));
        assert_eq!(source.base_price(), dec!(1000));
    }

    #[test]
    fn euro_ledger_supersedes_the_flat_price() {
        let mut item = product("999999", "0.5");
        item.euro_pricing = Some(EuroPricing {
            live_rate: "1.08".to_string(),
            fluff: "0.04".to_string(),
            sections: vec![
                EuroSection {
                    label: "Frames".to_string(),
                    amount: "600".to_string(),
                },
                EuroSection {
                    label: "Glazing".to_string(),
                    amount: "400".to_string(),
                },
            ],
        });

        let source = PricingSource::resolve(&item);

        // (600 + 400) * (1.08 + 0.04)
        assert_eq!(source.base_price(), dec!(1120));
    }

    #[test]
    fn empty_euro_ledger_prices_at_zero() {
        let mut item = product("500", "");
        item.euro_pricing = Some(EuroPricing::default());

        assert_eq!(PricingSource::resolve(&item).base_price(), dec!(0));
    }

    // =========================================================================
    // resolve tests
    // =========================================================================

    #[test]
    fn sell_price_is_rounded_up_marked_up_base() {
        let pricing = resolve(&[product("1000", "0.5")], &CalculatorInputs::default());

        assert_eq!(pricing.sell_total, dec!(1500));
        assert_eq!(pricing.cost_base, dec!(1000));
    }

    #[test]
    fn fractional_sell_prices_round_up_per_line() {
        let pricing = resolve(
            &[product("100.10", "0.5"), product("100.10", "0.5")],
            &CalculatorInputs::default(),
        );

        // Each line rounds 150.15 up to 151 before summing.
        assert_eq!(pricing.sell_total, dec!(302));
        assert_eq!(pricing.cost_base, dec!(200.20));
    }

    #[test]
    fn blank_markup_falls_back_to_calculator_default() {
        let pricing = resolve(&[product("1000", "")], &calculator_with_default_markup("0.25"));

        assert_eq!(pricing.sell_total, dec!(1250));
        assert_eq!(pricing.lines[0].markup, dec!(0.25));
    }

    #[test]
    fn explicit_zero_markup_is_not_blank() {
        let pricing = resolve(&[product("1000", "0")], &calculator_with_default_markup("0.25"));

        assert_eq!(pricing.sell_total, dec!(1000));
    }

    #[test]
    fn blank_product_prices_at_zero() {
        let pricing = resolve(&[ProductItem::default()], &CalculatorInputs::default());

        assert_eq!(pricing.sell_total, dec!(0));
        assert_eq!(pricing.cost_base, dec!(0));
    }
}

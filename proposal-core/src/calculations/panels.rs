//! Panel/unit aggregation over raw bucking line items.
//!
//! Reduces the fabrication rows into per-unit-type counts and dollar
//! totals against the panel catalog, and derives the lineal footage that
//! feeds the bucking and waterproofing cost bases.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, MathematicalOps};

use crate::calculations::common::{sum, to_decimal};
use crate::models::{BuckingLineItem, CalculatorInputs, PanelCounts, PanelType};

/// Per-unit-type aggregates plus the derived install-side figures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelAggregation {
    pub counts: BTreeMap<String, PanelCounts>,
    pub totals: BTreeMap<String, Decimal>,
    /// Aggregate dollar value of all panels, or the operator's override.
    pub install_value: Decimal,
    /// Derived linear footage across all rows.
    pub lineal_ft: Decimal,
}

/// Builds the read-only unit-type lookup for one computation call.
///
/// Seeded from the supplied catalog and extended with any code appearing
/// in the bucking rows that the catalog does not know. Ad-hoc codes are
/// tracked for quantity purposes but priced at zero until the catalog
/// catches up.
fn merge_catalog(catalog: &[PanelType], rows: &[BuckingLineItem]) -> BTreeMap<String, PanelType> {
    let mut merged: BTreeMap<String, PanelType> = catalog
        .iter()
        .map(|panel| (panel.id.clone(), panel.clone()))
        .collect();

    for row in rows {
        if row.unit_type.is_empty() {
            continue;
        }
        merged.entry(row.unit_type.clone()).or_insert_with(|| {
            tracing::warn!(
                unit_type = %row.unit_type,
                "unit type missing from catalog, priced at zero"
            );
            PanelType {
                id: row.unit_type.clone(),
                label: row.unit_type.clone(),
                price: Decimal::ZERO,
            }
        });
    }

    merged
}

/// Lineal footage of one bucking row.
///
/// `|sqrt((sqft/qty)/6) × 11| × qty`, an empirical perimeter
/// approximation from the fabrication shop. Rows with `qty <= 0`
/// contribute nothing, as does a negative radicand (no real root).
fn row_lineal_ft(row: &BuckingLineItem) -> Decimal {
    let qty = to_decimal(&row.qty);
    if qty <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let sqft = to_decimal(&row.sqft);
    let radicand = (sqft / qty) / Decimal::from(6);
    match radicand.sqrt() {
        Some(root) => (root * Decimal::from(11)).abs() * qty,
        None => Decimal::ZERO,
    }
}

/// Reduces the bucking rows against the panel catalog.
///
/// The overall install value is the sum of all panel dollar totals,
/// unless `calculator.override_install_total` is non-empty, in which
/// case that literal value replaces the aggregate entirely.
pub fn aggregate(
    catalog: &[PanelType],
    rows: &[BuckingLineItem],
    calculator: &CalculatorInputs,
) -> PanelAggregation {
    let merged = merge_catalog(catalog, rows);

    // Clerestory units bill at half the standard panel rate.
    let clerestory_factor = Decimal::new(5, 1);

    let mut counts = BTreeMap::new();
    let mut totals = BTreeMap::new();

    for (id, panel) in &merged {
        let mut tallied = PanelCounts::default();
        for row in rows.iter().filter(|row| row.unit_type == *id) {
            tallied.qty += to_decimal(&row.qty);
            tallied.clerestory_qty += to_decimal(&row.clerestory_qty);
            tallied.replacement_qty += to_decimal(&row.replacement_qty);
        }

        // Clerestories at half rate, replacements at full rate, both on
        // top of the base quantity.
        let total = panel.price * tallied.qty
            + panel.price * tallied.clerestory_qty * clerestory_factor
            + panel.price * tallied.replacement_qty;

        counts.insert(id.clone(), tallied);
        totals.insert(id.clone(), total);
    }

    let install_value = if calculator.override_install_total.trim().is_empty() {
        sum(totals.values().copied())
    } else {
        to_decimal(&calculator.override_install_total)
    };

    let lineal_ft = sum(rows.iter().map(row_lineal_ft));

    PanelAggregation {
        counts,
        totals,
        install_value,
        lineal_ft,
    }
}

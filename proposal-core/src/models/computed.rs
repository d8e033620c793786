//! The write-once output of a single estimate computation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five contract-price components.
///
/// `total_contract_price` is always the sum of the other four. In
/// change-order mode the product slot carries the vendor leg and the
/// installation slot carries the labor leg, so both modes share one
/// shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTotals {
    pub product_price: Decimal,
    pub bucking_price: Decimal,
    pub waterproofing_price: Decimal,
    pub installation_price: Decimal,
    pub total_contract_price: Decimal,
}

/// The seven milestone draw amounts.
///
/// The material draws partition `product_price` exactly; the install-side
/// draws partition bucking + waterproofing + installation exactly. The
/// third material draw and the final payment are remainders, never
/// independently computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub material_draw_1: Decimal,
    pub material_draw_2: Decimal,
    pub material_draw_3: Decimal,
    pub mobilization_deposit: Decimal,
    pub installation_draw_1: Decimal,
    pub installation_draw_2: Decimal,
    pub final_payment: Decimal,
}

/// Internal cost bases, retained for auditing.
///
/// These are the unrounded figures margins are computed against; the
/// rounded customer-facing numbers live in [`ContractTotals`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub product_cost_base: Decimal,
    pub bucking_cost_base: Decimal,
    pub waterproofing_cost_base: Decimal,
    pub install_cost_base: Decimal,
    pub covers_cost_base: Decimal,
    pub punch_cost_base: Decimal,
    pub rentals_cost: Decimal,
    pub lineal_ft: Decimal,
    pub install_value: Decimal,
}

/// Margin ratios per check slot. See [`ContractTotals`] for how
/// change-order legs map onto the slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub product_margin: Decimal,
    pub install_margin: Decimal,
    pub project_margin: Decimal,
}

/// Pass/fail per margin threshold. A margin exactly equal to its
/// threshold fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginChecks {
    pub product_ok: bool,
    pub install_ok: bool,
    pub project_ok: bool,
}

/// Per-unit-type quantity sums across bucking rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelCounts {
    pub qty: Decimal,
    pub clerestory_qty: Decimal,
    pub replacement_qty: Decimal,
}

/// A value in the flattened document-stamping map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PdfValue {
    Number(Decimal),
    Text(String),
}

impl From<Decimal> for PdfValue {
    fn from(value: Decimal) -> Self {
        PdfValue::Number(value)
    }
}

impl From<String> for PdfValue {
    fn from(value: String) -> Self {
        PdfValue::Text(value)
    }
}

impl From<&str> for PdfValue {
    fn from(value: &str) -> Self {
        PdfValue::Text(value.to_string())
    }
}

/// The complete priced proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateComputed {
    pub totals: ContractTotals,
    pub schedule: PaymentSchedule,
    pub breakdown: CostBreakdown,
    pub margins: Margins,
    pub margin_checks: MarginChecks,
    pub panel_counts: BTreeMap<String, PanelCounts>,
    pub panel_totals: BTreeMap<String, Decimal>,
    pub pdf_values: BTreeMap<String, PdfValue>,
}

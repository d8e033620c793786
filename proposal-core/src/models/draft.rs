//! The user-editable estimate draft.
//!
//! Drafts arrive as JSON saved from the estimating form, and the form is
//! permissive: numeric fields are decimal strings that may be empty,
//! half-typed, or carry currency punctuation, and whole sections may be
//! absent. Every field therefore deserializes with a default so a partial
//! draft mid-edit still round-trips. Interpretation of the loose strings
//! is the job of [`crate::calculations::common::to_decimal`], not of the
//! model layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a JSON string, number, bool, or null and stores it as a string.
///
/// The estimating form is inconsistent about whether it saves `"1000"` or
/// `1000`; both must load identically.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(rust_decimal::Decimal),
        Flag(bool),
        Null,
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => s,
        Loose::Number(n) => n.to_string(),
        Loose::Flag(b) => b.to_string(),
        Loose::Null => String::new(),
    })
}

/// Free-text project metadata.
///
/// Opaque to computation except [`project_type`](Self::project_type),
/// which selects the estimate mode. Unrecognized keys are preserved in
/// `extra` and passed through to the PDF value map untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub customer_name: String,
    pub project_name: String,
    pub project_type: String,
    pub proposal_date: String,
    pub plan_set_date: String,
    pub prepared_by: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// A catalog feature the user selected for a product (frame color,
/// glass type, hardware, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSelection {
    pub category: String,
    pub selection: String,
}

/// One line of a product's foreign-currency sub-ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuroSection {
    pub label: String,
    #[serde(deserialize_with = "loose_string")]
    pub amount: String,
}

/// Foreign-currency sub-ledger for a product.
///
/// The conversion rate actually applied is the live exchange rate plus a
/// margin buffer ("fluff") to absorb rate movement between estimate and
/// order; see [`Self::applied_rate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuroPricing {
    #[serde(deserialize_with = "loose_string")]
    pub live_rate: String,
    #[serde(deserialize_with = "loose_string")]
    pub fluff: String,
    pub sections: Vec<EuroSection>,
}

impl EuroPricing {
    /// EUR→USD rate applied to the sub-ledger subtotal: live rate + fluff.
    pub fn applied_rate(&self) -> rust_decimal::Decimal {
        crate::calculations::common::to_decimal(&self.live_rate)
            + crate::calculations::common::to_decimal(&self.fluff)
    }
}

/// A product line item.
///
/// `price` and `markup` are loose decimal strings; a blank `markup` falls
/// back to [`CalculatorInputs::product_markup_default`]. When
/// `euro_pricing` is present, its converted subtotal supersedes `price`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductItem {
    pub vendor_id: String,
    pub name: String,
    #[serde(deserialize_with = "loose_string")]
    pub price: String,
    #[serde(deserialize_with = "loose_string")]
    pub markup: String,
    pub split_finish: bool,
    pub euro_pricing: Option<EuroPricing>,
    pub features: Vec<FeatureSelection>,
}

/// One fabrication row, referencing a unit-type code from the panel
/// catalog. All quantities are loose decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuckingLineItem {
    pub unit_type: String,
    #[serde(deserialize_with = "loose_string")]
    pub qty: String,
    #[serde(deserialize_with = "loose_string")]
    pub sqft: String,
    #[serde(deserialize_with = "loose_string")]
    pub replacement_qty: String,
    #[serde(deserialize_with = "loose_string")]
    pub clerestory_qty: String,
}

/// Global rate inputs and hand-entry overrides.
///
/// The three `override_*` fields replace the corresponding computed cost
/// base outright when non-empty; an empty string means "use the formula".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    #[serde(deserialize_with = "loose_string")]
    pub install_markup: String,
    #[serde(deserialize_with = "loose_string")]
    pub product_markup_default: String,
    #[serde(deserialize_with = "loose_string")]
    pub bucking_rate: String,
    #[serde(deserialize_with = "loose_string")]
    pub waterproofing_rate: String,
    #[serde(deserialize_with = "loose_string")]
    pub rentals: String,
    #[serde(deserialize_with = "loose_string")]
    pub override_bucking_cost: String,
    #[serde(deserialize_with = "loose_string")]
    pub override_waterproofing_cost: String,
    #[serde(deserialize_with = "loose_string")]
    pub override_install_total: String,
}

impl Default for CalculatorInputs {
    /// The shop's standing rates, used when a draft carries no calculator
    /// section. Per-lineal-foot rates are in USD.
    fn default() -> Self {
        Self {
            install_markup: "0.35".to_string(),
            product_markup_default: "0.30".to_string(),
            bucking_rate: "7.71".to_string(),
            waterproofing_rate: "2.25".to_string(),
            rentals: String::new(),
            override_bucking_cost: String::new(),
            override_waterproofing_cost: String::new(),
            override_install_total: String::new(),
        }
    }
}

/// Single-line-item input used only in change-order mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeOrderInput {
    pub vendor_name: String,
    #[serde(deserialize_with = "loose_string")]
    pub vendor_cost: String,
    #[serde(deserialize_with = "loose_string")]
    pub vendor_markup: String,
    #[serde(deserialize_with = "loose_string")]
    pub labor_cost: String,
    #[serde(deserialize_with = "loose_string")]
    pub labor_markup: String,
}

/// The full user-editable input to the estimate engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateDraft {
    pub info: ProjectInfo,
    pub products: Vec<ProductItem>,
    pub bucking: Vec<BuckingLineItem>,
    pub calculator: CalculatorInputs,
    pub change_order: ChangeOrderInput,
}

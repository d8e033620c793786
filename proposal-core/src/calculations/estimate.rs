//! Proposal estimate orchestration.
//!
//! Turns a raw [`EstimateDraft`] into a priced proposal: contract totals,
//! cost bases, margins with pass/fail checks, per-unit-type panel
//! aggregates, the milestone payment schedule, and the flattened value
//! map handed to document generation.
//!
//! Two computation modes share one output shape, selected once from
//! `info.project_type`:
//!
//! * **Standard** — the full pipeline: product pricing → panel
//!   aggregation → install decomposition → payment schedule → margins.
//! * **Change order** — a single vendor/labor line pair; the whole
//!   contract price falls due as the final payment.
//!
//! The engine is pure and infallible. Malformed numeric input degrades
//! to zero (see [`crate::calculations::common::to_decimal`]); a call
//! always returns a complete, well-formed result.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proposal_core::{
//!     EstimateDraft, MarginThresholds, PanelType, ProductItem, ProposalEstimator,
//! };
//!
//! let catalog = vec![PanelType {
//!     id: "SH".to_string(),
//!     label: "Single Hung".to_string(),
//!     price: dec!(450),
//! }];
//!
//! let mut draft = EstimateDraft::default();
//! draft.products.push(ProductItem {
//!     name: "W-1".to_string(),
//!     price: "1000".to_string(),
//!     markup: "0.5".to_string(),
//!     ..ProductItem::default()
//! });
//!
//! let estimator = ProposalEstimator::new(&catalog, MarginThresholds::default());
//! let computed = estimator.calculate(&draft);
//!
//! assert_eq!(computed.totals.product_price, dec!(1500));
//! assert_eq!(computed.breakdown.product_cost_base, dec!(1000));
//! assert_eq!(
//!     computed.schedule.material_draw_1
//!         + computed.schedule.material_draw_2
//!         + computed.schedule.material_draw_3,
//!     dec!(1500)
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{change_order, install, margins, panels, products, schedule};
use crate::models::{
    ContractTotals, CostBreakdown, EstimateComputed, EstimateDraft, MarginThresholds, Margins,
    PanelType,
};
use crate::pdf_values;

/// Which computation pipeline a draft runs through.
///
/// Resolved exactly once at the entry point so mode never leaks into the
/// shared computation code as scattered string checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateMode {
    Standard,
    ChangeOrder,
}

impl EstimateMode {
    /// Resolves the mode from the draft's free-text project type.
    ///
    /// Case-insensitive: any string containing `"change order"`, or equal
    /// to `"change-order"`, selects change-order mode. Everything else,
    /// including blank, is a standard estimate.
    pub fn from_project_type(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        if normalized.contains("change order") || normalized == "change-order" {
            EstimateMode::ChangeOrder
        } else {
            EstimateMode::Standard
        }
    }
}

/// Calculator for complete proposal estimates.
///
/// Holds the panel-type catalog and margin thresholds; each
/// [`calculate`](Self::calculate) call operates solely on its own input
/// and allocates fresh output, so one estimator may be shared across
/// concurrent computations freely.
#[derive(Debug, Clone)]
pub struct ProposalEstimator<'a> {
    catalog: &'a [PanelType],
    thresholds: MarginThresholds,
}

impl<'a> ProposalEstimator<'a> {
    /// Creates an estimator over the given unit-type catalog and margin
    /// thresholds.
    pub fn new(catalog: &'a [PanelType], thresholds: MarginThresholds) -> Self {
        Self {
            catalog,
            thresholds,
        }
    }

    /// Computes the priced proposal for one draft.
    ///
    /// Dispatches on [`EstimateMode`] and assembles the shared output
    /// shape. Never fails; malformed input yields zero-valued rollups.
    pub fn calculate(&self, draft: &EstimateDraft) -> EstimateComputed {
        let mode = EstimateMode::from_project_type(&draft.info.project_type);
        tracing::debug!(?mode, project = %draft.info.project_name, "computing estimate");

        match mode {
            EstimateMode::Standard => self.calculate_standard(draft),
            EstimateMode::ChangeOrder => self.calculate_change_order(draft),
        }
    }

    fn calculate_standard(&self, draft: &EstimateDraft) -> EstimateComputed {
        let pricing = products::resolve(&draft.products, &draft.calculator);
        let aggregation = panels::aggregate(self.catalog, &draft.bucking, &draft.calculator);
        let install = install::decompose(
            aggregation.install_value,
            aggregation.lineal_ft,
            &draft.calculator,
        );

        let totals = ContractTotals {
            product_price: pricing.sell_total,
            bucking_price: install.bucking_price,
            waterproofing_price: install.waterproofing_price,
            installation_price: install.installation_price,
            total_contract_price: pricing.sell_total
                + install.bucking_price
                + install.waterproofing_price
                + install.installation_price,
        };

        let schedule = schedule::build(&totals);

        let computed_margins = Margins {
            product_margin: margins::margin(totals.product_price, pricing.cost_base),
            install_margin: margins::margin(install.total_price(), install.total_cost()),
            project_margin: margins::margin(
                totals.total_contract_price,
                pricing.cost_base + install.total_cost(),
            ),
        };
        let margin_checks = margins::evaluate_checks(&computed_margins, &self.thresholds);

        let breakdown = CostBreakdown {
            product_cost_base: pricing.cost_base,
            bucking_cost_base: install.bucking_cost,
            waterproofing_cost_base: install.waterproofing_cost,
            install_cost_base: install.install_cost,
            covers_cost_base: install.covers_cost,
            punch_cost_base: install.punch_cost,
            rentals_cost: install.rentals_cost,
            lineal_ft: aggregation.lineal_ft,
            install_value: aggregation.install_value,
        };

        let pdf_values = pdf_values::build(
            &draft.info,
            &draft.products,
            &totals,
            &schedule,
            &computed_margins,
        );

        EstimateComputed {
            totals,
            schedule,
            breakdown,
            margins: computed_margins,
            margin_checks,
            panel_counts: aggregation.counts,
            panel_totals: aggregation.totals,
            pdf_values,
        }
    }

    fn calculate_change_order(&self, draft: &EstimateDraft) -> EstimateComputed {
        let priced = change_order::price(&draft.change_order);
        let margin_checks = margins::evaluate_checks(&priced.margins, &self.thresholds);

        let breakdown = CostBreakdown {
            product_cost_base: priced.vendor_cost,
            install_cost_base: priced.labor_cost,
            ..CostBreakdown::default()
        };

        let pdf_values = pdf_values::build(
            &draft.info,
            &draft.products,
            &priced.totals,
            &priced.schedule,
            &priced.margins,
        );

        EstimateComputed {
            totals: priced.totals,
            schedule: priced.schedule,
            breakdown,
            margins: priced.margins,
            margin_checks,
            panel_counts: Default::default(),
            panel_totals: Default::default(),
            pdf_values,
        }
    }
}

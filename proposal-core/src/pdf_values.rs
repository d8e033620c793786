//! The flattened value map consumed by the document-stamping collaborator.
//!
//! This map is the sole interface between the engine and proposal
//! generation: a flat string/number record merging project metadata with
//! every priced total. Keys absent here render as the stamping layer's
//! missing-value sentinel; that substitution is its concern, not ours.

use std::collections::BTreeMap;

use crate::features::feature_block;
use crate::format::{format_date_cover, format_date_plan, parse_date};
use crate::models::{ContractTotals, Margins, PaymentSchedule, PdfValue, ProductItem, ProjectInfo};

/// Builds the flattened stamping map for one computed estimate.
///
/// Dates are reformatted to template style when parseable and passed
/// through verbatim otherwise; everything else is a literal copy of the
/// computed figures.
pub fn build(
    info: &ProjectInfo,
    products: &[ProductItem],
    totals: &ContractTotals,
    schedule: &PaymentSchedule,
    margins: &Margins,
) -> BTreeMap<String, PdfValue> {
    let mut values: BTreeMap<String, PdfValue> = BTreeMap::new();

    for (key, value) in &info.extra {
        values.insert(key.clone(), value.clone().into());
    }

    values.insert("customer_name".to_string(), info.customer_name.clone().into());
    values.insert("project_name".to_string(), info.project_name.clone().into());
    values.insert("project_type".to_string(), info.project_type.clone().into());
    values.insert("prepared_by".to_string(), info.prepared_by.clone().into());

    let proposal_date = match parse_date(&info.proposal_date) {
        Some(date) => format_date_cover(date),
        None => info.proposal_date.clone(),
    };
    values.insert("proposal_date".to_string(), proposal_date.into());

    let plan_set_date = match parse_date(&info.plan_set_date) {
        Some(date) => format_date_plan(date),
        None => info.plan_set_date.trim().to_string(),
    };
    let plan_set_date_line = if plan_set_date.is_empty() {
        String::new()
    } else {
        format!("Estimate based on plan set dated: {plan_set_date}")
    };
    values.insert("plan_set_date".to_string(), plan_set_date.into());
    values.insert("plan_set_date_line".to_string(), plan_set_date_line.into());

    values.insert("product_price".to_string(), totals.product_price.into());
    values.insert("bucking_price".to_string(), totals.bucking_price.into());
    values.insert(
        "waterproofing_price".to_string(),
        totals.waterproofing_price.into(),
    );
    values.insert(
        "installation_price".to_string(),
        totals.installation_price.into(),
    );
    values.insert(
        "total_contract_price".to_string(),
        totals.total_contract_price.into(),
    );

    values.insert("material_draw_1".to_string(), schedule.material_draw_1.into());
    values.insert("material_draw_2".to_string(), schedule.material_draw_2.into());
    values.insert("material_draw_3".to_string(), schedule.material_draw_3.into());
    values.insert(
        "mobilization_deposit".to_string(),
        schedule.mobilization_deposit.into(),
    );
    values.insert(
        "installation_draw_1".to_string(),
        schedule.installation_draw_1.into(),
    );
    values.insert(
        "installation_draw_2".to_string(),
        schedule.installation_draw_2.into(),
    );
    values.insert("final_payment".to_string(), schedule.final_payment.into());

    values.insert("product_margin".to_string(), margins.product_margin.into());
    values.insert("install_margin".to_string(), margins.install_margin.into());
    values.insert("project_margin".to_string(), margins.project_margin.into());

    values.insert(
        "product_features_block".to_string(),
        feature_block(products).into(),
    );

    values
}

//! End-to-end scenarios over the full estimate pipeline.
//!
//! These pin the engine's observable behavior for complete drafts,
//! including the degrade-to-zero policy for incomplete input: a silently
//! zero-filled result is intentional tolerance for drafts mid-edit, not a
//! bug to fix here.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use proposal_core::{
    BuckingLineItem, EstimateDraft, MarginThresholds, PanelType, ProductItem, ProposalEstimator,
};

fn catalog() -> Vec<PanelType> {
    vec![
        PanelType {
            id: "SH".to_string(),
            label: "Single Hung".to_string(),
            price: dec!(450),
        },
        PanelType {
            id: "CA".to_string(),
            label: "Casement".to_string(),
            price: dec!(520),
        },
    ]
}

fn estimator(catalog: &[PanelType]) -> ProposalEstimator<'_> {
    ProposalEstimator::new(catalog, MarginThresholds::default())
}

#[test]
fn empty_draft_prices_to_all_zeros() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.products.push(ProductItem::default());
    draft.bucking.push(BuckingLineItem::default());

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(computed.totals.product_price, dec!(0));
    assert_eq!(computed.totals.total_contract_price, dec!(0));
    assert_eq!(computed.margins.product_margin, dec!(0));
    assert_eq!(computed.margins.install_margin, dec!(0));
    assert_eq!(computed.margins.project_margin, dec!(0));
    assert_eq!(computed.schedule.final_payment, dec!(0));
}

#[test]
fn single_product_draft_matches_hand_computation() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.products.push(ProductItem {
        price: "1000".to_string(),
        markup: "0.5".to_string(),
        ..ProductItem::default()
    });

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(computed.totals.product_price, dec!(1500));
    assert_eq!(computed.breakdown.product_cost_base, dec!(1000));
    // (1500 - 1000) / 1500
    assert_eq!(computed.margins.product_margin.round_dp(4), dec!(0.3333));
}

#[test]
fn bucking_row_drives_lineal_footage_and_cost() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.bucking.push(BuckingLineItem {
        unit_type: "SH".to_string(),
        qty: "10".to_string(),
        sqft: "60".to_string(),
        ..BuckingLineItem::default()
    });
    draft.calculator.bucking_rate = "7.71".to_string();

    let computed = estimator(&catalog).calculate(&draft);

    // sqrt((60/10)/6) * 11 * 10 = 110 lineal ft
    assert_eq!(computed.breakdown.lineal_ft.round_dp(6), dec!(110));
    assert_eq!(computed.breakdown.bucking_cost_base.round_dp(2), dec!(848.10));
}

#[test]
fn change_order_draft_prices_both_legs() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.info.project_type = "Change Order".to_string();
    draft.change_order.vendor_cost = "500".to_string();
    draft.change_order.vendor_markup = "0.2".to_string();
    draft.change_order.labor_cost = "300".to_string();
    draft.change_order.labor_markup = "0.35".to_string();

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(computed.totals.product_price, dec!(600));
    assert_eq!(computed.totals.installation_price, dec!(405));
    assert_eq!(computed.totals.total_contract_price, dec!(1005));
    assert_eq!(computed.schedule.final_payment, dec!(1005));
    assert_eq!(computed.schedule.material_draw_1, dec!(0));
    assert_eq!(computed.schedule.material_draw_2, dec!(0));
    assert_eq!(computed.schedule.material_draw_3, dec!(0));
    assert_eq!(computed.schedule.mobilization_deposit, dec!(0));
    assert_eq!(computed.schedule.installation_draw_1, dec!(0));
    assert_eq!(computed.schedule.installation_draw_2, dec!(0));
}

#[test]
fn bucking_override_bypasses_the_footage_formula() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.bucking.push(BuckingLineItem {
        unit_type: "SH".to_string(),
        qty: "10".to_string(),
        sqft: "60".to_string(),
        ..BuckingLineItem::default()
    });
    draft.calculator.override_bucking_cost = "100".to_string();

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(computed.breakdown.bucking_cost_base, dec!(100));
}

#[test]
fn material_draws_partition_product_price_exactly() {
    let catalog = catalog();
    for price in ["1000", "333.77", "99999.99"] {
        let mut draft = EstimateDraft::default();
        draft.products.push(ProductItem {
            price: price.to_string(),
            markup: "0.42".to_string(),
            ..ProductItem::default()
        });

        let computed = estimator(&catalog).calculate(&draft);

        assert_eq!(
            computed.schedule.material_draw_1
                + computed.schedule.material_draw_2
                + computed.schedule.material_draw_3,
            computed.totals.product_price
        );
    }
}

#[test]
fn install_draws_partition_the_install_side_exactly() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.bucking.push(BuckingLineItem {
        unit_type: "SH".to_string(),
        qty: "7".to_string(),
        sqft: "93".to_string(),
        ..BuckingLineItem::default()
    });
    draft.calculator.rentals = "250.50".to_string();

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(
        computed.schedule.mobilization_deposit
            + computed.schedule.installation_draw_1
            + computed.schedule.installation_draw_2
            + computed.schedule.final_payment,
        computed.totals.bucking_price
            + computed.totals.waterproofing_price
            + computed.totals.installation_price
    );
}

#[test]
fn identical_input_yields_identical_output() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.info.project_name = "Seaside Residence".to_string();
    draft.products.push(ProductItem {
        price: "12500.75".to_string(),
        markup: "".to_string(),
        ..ProductItem::default()
    });
    draft.bucking.push(BuckingLineItem {
        unit_type: "CA".to_string(),
        qty: "4".to_string(),
        sqft: "88".to_string(),
        clerestory_qty: "1".to_string(),
        ..BuckingLineItem::default()
    });

    let engine = estimator(&catalog);
    let first = engine.calculate(&draft);
    let second = engine.calculate(&draft.clone());

    assert_eq!(first, second);
}

#[test]
fn unparseable_numerics_degrade_to_zero_not_error() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.products.push(ProductItem {
        price: "call vendor".to_string(),
        markup: "??".to_string(),
        ..ProductItem::default()
    });
    draft.bucking.push(BuckingLineItem {
        unit_type: "SH".to_string(),
        qty: "a few".to_string(),
        sqft: "tbd".to_string(),
        ..BuckingLineItem::default()
    });

    let computed = estimator(&catalog).calculate(&draft);

    assert_eq!(computed.totals.total_contract_price, dec!(0));
    assert_eq!(computed.breakdown.lineal_ft, dec!(0));
}

#[test]
fn full_standard_draft_end_to_end() {
    let catalog = catalog();
    let mut draft = EstimateDraft::default();
    draft.info.customer_name = "Acme Builders".to_string();
    draft.info.proposal_date = "2025-08-04".to_string();
    draft.products.push(ProductItem {
        name: "W-1".to_string(),
        price: "1000".to_string(),
        markup: "0.5".to_string(),
        ..ProductItem::default()
    });
    draft.bucking.push(BuckingLineItem {
        unit_type: "SH".to_string(),
        qty: "10".to_string(),
        sqft: "60".to_string(),
        ..BuckingLineItem::default()
    });
    draft.calculator.install_markup = "0.35".to_string();
    draft.calculator.bucking_rate = "7.71".to_string();
    draft.calculator.waterproofing_rate = "2.25".to_string();

    let computed = estimator(&catalog).calculate(&draft);

    // Panels: 450 * 10 = 4500 install value, split 3150/900/450.
    assert_eq!(computed.breakdown.install_value, dec!(4500));
    assert_eq!(computed.breakdown.install_cost_base, dec!(3150));
    assert_eq!(computed.breakdown.covers_cost_base, dec!(900));
    assert_eq!(computed.breakdown.punch_cost_base, dec!(450));

    // Sells: 3150*1.35=4252.5->4253, 900*1.35=1215, 450*1.35=607.5->608.
    assert_eq!(computed.totals.installation_price, dec!(6076));
    // Bucking 848.1*1.35=1144.935->1145; waterproofing 247.5*1.35=334.125->335.
    assert_eq!(computed.totals.bucking_price, dec!(1145));
    assert_eq!(computed.totals.waterproofing_price, dec!(335));
    assert_eq!(
        computed.totals.total_contract_price,
        dec!(1500) + dec!(1145) + dec!(335) + dec!(6076)
    );

    // The stamping map carries every key document generation reads.
    assert!(computed.pdf_values.contains_key("customer_name"));
    assert!(computed.pdf_values.contains_key("total_contract_price"));
    assert!(computed.pdf_values.contains_key("material_draw_3"));
    assert!(computed.pdf_values.contains_key("product_features_block"));
}

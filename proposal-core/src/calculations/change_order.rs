//! Change-order mode: a simplified single vendor/labor pricing pass.
//!
//! Bypasses panel aggregation, install decomposition and the milestone
//! schedule entirely. The whole contract price falls due as the final
//! payment.

use rust_decimal::Decimal;

use crate::calculations::common::{round_up, to_decimal};
use crate::calculations::margins::margin;
use crate::models::{ChangeOrderInput, ContractTotals, Margins, PaymentSchedule};

/// Priced change order sharing the standard-mode output slots: vendor leg
/// in the product slot, labor leg in the installation slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricedChangeOrder {
    pub vendor_cost: Decimal,
    pub labor_cost: Decimal,
    pub totals: ContractTotals,
    pub schedule: PaymentSchedule,
    pub margins: Margins,
}

/// Prices a change order.
///
/// `vendor_price = round_up(vendor_cost × (1 + vendor_markup))`, labor
/// likewise; the contract price is their sum and every schedule entry is
/// zero except `final_payment`, which carries the whole amount.
pub fn price(input: &ChangeOrderInput) -> PricedChangeOrder {
    let vendor_cost = to_decimal(&input.vendor_cost);
    let labor_cost = to_decimal(&input.labor_cost);

    let vendor_price =
        round_up(vendor_cost * (Decimal::ONE + to_decimal(&input.vendor_markup)));
    let labor_price = round_up(labor_cost * (Decimal::ONE + to_decimal(&input.labor_markup)));
    let total_contract_price = vendor_price + labor_price;

    tracing::debug!(%vendor_price, %labor_price, "change order priced");

    PricedChangeOrder {
        vendor_cost,
        labor_cost,
        totals: ContractTotals {
            product_price: vendor_price,
            bucking_price: Decimal::ZERO,
            waterproofing_price: Decimal::ZERO,
            installation_price: labor_price,
            total_contract_price,
        },
        schedule: PaymentSchedule {
            final_payment: total_contract_price,
            ..PaymentSchedule::default()
        },
        margins: Margins {
            product_margin: margin(vendor_price, vendor_cost),
            install_margin: margin(labor_price, labor_cost),
            project_margin: margin(total_contract_price, vendor_cost + labor_cost),
        },
    }
}

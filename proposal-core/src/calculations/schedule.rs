//! Milestone payment schedule derivation.
//!
//! Schedule values are never independently rounded; only the upstream
//! totals they are built from are. The third material draw and the final
//! payment are remainders, which is what makes both partition invariants
//! exact by construction.

use rust_decimal::Decimal;

use crate::models::{ContractTotals, PaymentSchedule};

/// The material draw ratio is the literal `0.33333`, not an exact third.
/// Business convention: the first two draws shave slightly under a third
/// each and the final material draw absorbs the difference. Do not
/// "correct" this to 1/3; reconciliation depends on the remainder.
fn material_draw_ratio() -> Decimal {
    Decimal::new(33333, 5)
}

/// Install-side draws each take 30% of the installation price.
fn install_draw_ratio() -> Decimal {
    Decimal::new(30, 2)
}

/// Derives the seven milestone draws from the priced totals.
///
/// Material draws partition `product_price`; the mobilization deposit
/// carries bucking and waterproofing in full plus 30% of installation,
/// the two installation draws take 30% each, and the final payment is
/// the remainder of the install-side total.
pub fn build(totals: &ContractTotals) -> PaymentSchedule {
    let material_draw_1 = totals.product_price * material_draw_ratio();
    let material_draw_2 = totals.product_price * material_draw_ratio();
    let material_draw_3 = totals.product_price - material_draw_1 - material_draw_2;

    let install_side_total =
        totals.bucking_price + totals.waterproofing_price + totals.installation_price;

    let mobilization_deposit = totals.bucking_price
        + totals.waterproofing_price
        + totals.installation_price * install_draw_ratio();
    let installation_draw_1 = totals.installation_price * install_draw_ratio();
    let installation_draw_2 = totals.installation_price * install_draw_ratio();
    let final_payment =
        install_side_total - mobilization_deposit - installation_draw_1 - installation_draw_2;

    PaymentSchedule {
        material_draw_1,
        material_draw_2,
        material_draw_3,
        mobilization_deposit,
        installation_draw_1,
        installation_draw_2,
        final_payment,
    }
}

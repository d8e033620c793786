//! Installation-side cost decomposition.
//!
//! Splits the aggregate install value into fixed-ratio cost buckets and
//! marks every bucket up to its sell price. Bucking and waterproofing
//! cost bases derive from lineal footage unless the operator hand-enters
//! a negotiated override.

use rust_decimal::Decimal;

use crate::calculations::common::{round_up, to_decimal};
use crate::models::CalculatorInputs;

/// Cost bases and sell prices for the installation side of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallDecomposition {
    pub bucking_cost: Decimal,
    pub waterproofing_cost: Decimal,
    pub install_cost: Decimal,
    pub covers_cost: Decimal,
    pub punch_cost: Decimal,
    pub rentals_cost: Decimal,

    pub bucking_price: Decimal,
    pub waterproofing_price: Decimal,
    /// Install + covers + punch-out sell prices combined.
    pub installation_price: Decimal,
}

impl InstallDecomposition {
    /// Total unrounded cost base across every install-side bucket,
    /// rentals included. This is what the install margin is computed
    /// against.
    pub fn total_cost(&self) -> Decimal {
        self.bucking_cost
            + self.waterproofing_cost
            + self.install_cost
            + self.covers_cost
            + self.punch_cost
            + self.rentals_cost
    }

    /// Total install-side revenue.
    pub fn total_price(&self) -> Decimal {
        self.bucking_price + self.waterproofing_price + self.installation_price
    }
}

/// Returns the override value when the field is non-empty, else the
/// computed base. Empty string and "not provided" are the same thing.
fn override_or(override_field: &str, computed: Decimal) -> Decimal {
    if override_field.trim().is_empty() {
        computed
    } else {
        to_decimal(override_field)
    }
}

/// Decomposes the install value and lineal footage into priced buckets.
///
/// The aggregate install value splits 70% install / 20% covers / 10%
/// punch-out, each bucket individually rounded up. Every bucket is then
/// marked up by `install_markup` and rounded up to its sell price
/// independently. Rentals are marked up but not rounded; they ride
/// inside the install sell price as a raw figure.
pub fn decompose(
    install_value: Decimal,
    lineal_ft: Decimal,
    calculator: &CalculatorInputs,
) -> InstallDecomposition {
    let bucking_rate = to_decimal(&calculator.bucking_rate);
    let waterproofing_rate = to_decimal(&calculator.waterproofing_rate);

    let bucking_cost = override_or(&calculator.override_bucking_cost, lineal_ft * bucking_rate);
    let waterproofing_cost = override_or(
        &calculator.override_waterproofing_cost,
        lineal_ft * waterproofing_rate,
    );

    let install_cost = round_up(install_value * Decimal::new(70, 2));
    let covers_cost = round_up(install_value * Decimal::new(20, 2));
    let punch_cost = round_up(install_value * Decimal::new(10, 2));
    let rentals_cost = to_decimal(&calculator.rentals);

    let markup_factor = Decimal::ONE + to_decimal(&calculator.install_markup);

    let bucking_price = round_up(bucking_cost * markup_factor);
    let waterproofing_price = round_up(waterproofing_cost * markup_factor);
    let install_price = round_up(install_cost * markup_factor) + rentals_cost * markup_factor;
    let covers_price = round_up(covers_cost * markup_factor);
    let punch_price = round_up(punch_cost * markup_factor);

    tracing::debug!(
        %bucking_cost,
        %waterproofing_cost,
        %install_cost,
        %covers_cost,
        %punch_cost,
        "install cost bases decomposed"
    );

    InstallDecomposition {
        bucking_cost,
        waterproofing_cost,
        install_cost,
        covers_cost,
        punch_cost,
        rentals_cost,
        bucking_price,
        waterproofing_price,
        installation_price: install_price + covers_price + punch_price,
    }
}

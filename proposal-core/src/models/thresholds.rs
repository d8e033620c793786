use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum acceptable margin ratios, one per check.
///
/// Thresholds are comparison bounds only; the engine never mutates them.
/// Out-of-range or missing values are clamped into `[0, 1]` by
/// [`normalized`](Self::normalized), with `0` (the most permissive bound)
/// as the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginThresholds {
    pub product_min: Decimal,
    pub install_min: Decimal,
    pub project_min: Decimal,
}

impl MarginThresholds {
    /// Clamps every threshold into `[0, 1]`.
    pub fn normalized(&self) -> Self {
        Self {
            product_min: clamp_ratio(self.product_min),
            install_min: clamp_ratio(self.install_min),
            project_min: clamp_ratio(self.project_min),
        }
    }
}

fn clamp_ratio(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

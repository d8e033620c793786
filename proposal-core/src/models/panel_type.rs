use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog unit-type code (e.g. "SH", "CA") with its per-unit price.
///
/// Bucking line items reference these by `id`. Codes appearing in a draft
/// but missing from the catalog are tracked for quantity purposes at a
/// price of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelType {
    pub id: String,
    pub label: String,
    pub price: Decimal,
}

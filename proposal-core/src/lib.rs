pub mod calculations;
pub mod features;
pub mod format;
pub mod models;
pub mod pdf_values;

pub use calculations::estimate::{EstimateMode, ProposalEstimator};
pub use models::*;

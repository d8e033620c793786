//! Estimate computation modules for the proposal engine.
//!
//! Composed bottom-up: numeric normalization and margin evaluation at the
//! leaves, then panel aggregation, product pricing, install decomposition
//! and the payment schedule, assembled by the orchestrator in
//! [`estimate`].

pub mod change_order;
pub mod common;
pub mod estimate;
pub mod install;
pub mod margins;
pub mod panels;
pub mod products;
pub mod schedule;

pub use estimate::{EstimateMode, ProposalEstimator};

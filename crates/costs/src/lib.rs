//! # Meridian Transaction-Cost Model
//!
//! This crate evaluates how a strategy's performance changes under
//! transaction-cost assumptions: gross monthly returns plus a turnover
//! assumption and a cost scenario in, net-of-cost metrics out.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure calculation, no I/O. Depends on `core-types` for
//!   the shared vocabulary and on `analytics::stats` so net figures use
//!   exactly the same estimators as gross ones.
//! - **Injected Assumptions:** Turnover rates and cost scenarios are supplied
//!   by the caller per run. There is no baked-in strategy table; an unknown
//!   strategy is a typed error, never a silent default.
//!
//! ## Public API
//!
//! - `TransactionCostModel`: The calculator for (strategy, scenario) pairs.
//! - `CostScenario`, `TurnoverAssumption`, `GrossPerformance`: The inputs.
//! - `CostAdjustedResult`: The net-of-cost record handed to renderers.
//! - `CostError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod model;
pub mod report;
pub mod scenario;

// Re-export the key components to create a clean, public-facing API.
pub use error::CostError;
pub use model::TransactionCostModel;
pub use report::CostAdjustedResult;
pub use scenario::{CostScenario, GrossPerformance, TurnoverAssumption};

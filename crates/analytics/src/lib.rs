//! # Meridian Analytics Engine
//!
//! This crate computes the standardized risk/return metrics for a single
//! monthly return series. It acts as the "unbiased judge" of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and no I/O. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes a validated `ReturnSeries` (plus an optional
//!   reference series and a risk-free assumption) and produces a
//!   `MetricsBundle`. Calling it twice on the same inputs yields bit-identical
//!   results, which makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `MetricsBundle`: The standardized struct that holds all computed metrics.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.
//! - `stats`: The estimator primitives, shared with the cost model so net and
//!   gross figures are always computed the same way.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, MIN_OBS_NORMALITY};
pub use error::AnalyticsError;
pub use report::MetricsBundle;
pub use stats::MIN_OBS_VARIANCE;

//! # Meridian Core Types
//!
//! The foundational data types shared by every other crate in the workspace.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no dependencies on any other workspace crate.
//!   It defines the vocabulary of the system: return series, assumptions, and
//!   the tagged values that make undefined quantities explicit.
//! - **Immutability:** A `ReturnSeries` is validated once at construction and
//!   never mutated afterwards. Every downstream metric is a pure function of
//!   these inputs.

pub mod assumptions;
pub mod error;
pub mod ratio;
pub mod series;

// Re-export the core types to provide a clean public API.
pub use assumptions::RiskFreeAssumption;
pub use error::CoreError;
pub use ratio::{BetaEstimate, RatioValue};
pub use series::ReturnSeries;

/// The number of return periods in a year. The engine operates on monthly data.
pub const PERIODS_PER_YEAR: u32 = 12;

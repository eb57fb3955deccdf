//! # Meridian
//!
//! A performance and risk analytics engine for monthly return series.
//!
//! Meridian computes a standardized bundle of risk/return metrics per series
//! (annualized return and volatility, distribution shape, Jarque-Bera
//! normality, VaR/CVaR, maximum drawdown, Sharpe/Sortino, optional beta) and
//! evaluates how strategy performance changes under transaction-cost
//! assumptions. Everything is a pure function of explicit inputs: rendering,
//! data loading, and portfolio construction live outside this workspace.
//!
//! The workspace is layered:
//! - [`core_types`]: the shared vocabulary (`ReturnSeries`, assumptions,
//!   tagged ratio values).
//! - [`analytics`]: the per-series metrics engine.
//! - [`costs`]: the transaction-cost scenario model.
//!
//! ## Example
//!
//! ```no_run
//! use meridian::{AnalyticsEngine, ReturnSeries, RiskFreeAssumption};
//!
//! # fn series() -> ReturnSeries { unimplemented!() }
//! let engine = AnalyticsEngine::new();
//! let rf = RiskFreeAssumption::new(0.065);
//! let bundle = engine.analyze(&series(), None, &rf)?;
//! match bundle.sharpe.value() {
//!     Some(s) => println!("sharpe {s:.2}"),
//!     None => println!("sharpe N/A"),
//! }
//! # Ok::<(), meridian::AnalyticsError>(())
//! ```

pub use analytics::{AnalyticsEngine, AnalyticsError, MetricsBundle};
pub use core_types::{
    BetaEstimate, CoreError, PERIODS_PER_YEAR, RatioValue, ReturnSeries, RiskFreeAssumption,
};
pub use costs::{
    CostAdjustedResult, CostError, CostScenario, GrossPerformance, TransactionCostModel,
    TurnoverAssumption,
};

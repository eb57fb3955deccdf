use core_types::ReturnSeries;
use serde::{Deserialize, Serialize};

/// A named transaction-cost scenario, with the cost per trade in basis points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostScenario {
    pub label: String,
    /// Cost per trade in basis points (1 bps = 0.0001).
    pub cost_bps: f64,
}

impl CostScenario {
    pub fn new(label: impl Into<String>, cost_bps: f64) -> Self {
        Self {
            label: label.into(),
            cost_bps,
        }
    }

    /// The fractional cost rate: `cost_bps / 10000`.
    pub fn cost_rate(&self) -> f64 {
        self.cost_bps / 10_000.0
    }

    /// The conventional Low/Base/High scenario set (10 / 15 / 30 bps).
    /// Callers are free to supply any other set.
    pub fn default_set() -> Vec<CostScenario> {
        vec![
            CostScenario::new("Low", 10.0),
            CostScenario::new("Base", 15.0),
            CostScenario::new("High", 30.0),
        ]
    }
}

/// The turnover assumption for one strategy: how much of the portfolio is
/// traded per year, and how often rebalancing happens.
///
/// Supplied explicitly by the caller per run; the engine carries no built-in
/// per-strategy turnover table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverAssumption {
    /// Fraction of portfolio value traded per year (e.g., 0.30 for 30%).
    pub annual_turnover: f64,
    /// Rebalancing events per year (e.g., 2 for semiannual).
    pub rebalancing_frequency: u32,
}

impl TurnoverAssumption {
    pub fn new(annual_turnover: f64, rebalancing_frequency: u32) -> Self {
        Self {
            annual_turnover,
            rebalancing_frequency,
        }
    }
}

/// The gross performance of one strategy, as produced upstream by the
/// analytics engine: its annualized return plus the monthly gross series the
/// cost drag is applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossPerformance {
    pub annual_return: f64,
    pub monthly_returns: ReturnSeries,
}

impl GrossPerformance {
    pub fn new(annual_return: f64, monthly_returns: ReturnSeries) -> Self {
        Self {
            annual_return,
            monthly_returns,
        }
    }
}

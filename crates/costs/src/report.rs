use core_types::RatioValue;
use serde::{Deserialize, Serialize};

/// Net-of-cost performance for one (strategy, cost scenario) pair.
///
/// Derived entirely from the strategy's gross performance plus the turnover
/// and cost inputs, which are echoed back so every figure is reproducible
/// from the record alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAdjustedResult {
    pub strategy: String,
    pub scenario: String,
    pub cost_bps: f64,

    /// Annualized gross return, as supplied.
    pub gross_annual_return: f64,
    /// Annualized return recomputed on the cost-adjusted monthly series.
    pub net_annual_return: f64,
    /// Annualized cost drag: turnover × cost rate × rebalancing frequency.
    pub annual_cost: f64,
    /// (gross − net annual return) × 10000.
    pub cost_impact_bps: f64,
    /// Annualized volatility of the cost-adjusted series.
    pub net_volatility: f64,
    /// Sharpe of the cost-adjusted series; undefined on zero volatility.
    pub net_sharpe: RatioValue,

    // Inputs used, echoed for reproducibility.
    pub annual_turnover: f64,
    pub rebalancing_frequency: u32,
}

use core_types::{BetaEstimate, RatioValue};
use serde::{Deserialize, Serialize};

/// The standardized risk/return metrics for one analyzed series.
///
/// This struct is the final output of the `AnalyticsEngine` and the data
/// transfer object handed to external rendering collaborators. Every field is
/// computed, never stored input; values are plain fractions (0.12, not "12%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    /// Number of monthly observations the metrics were computed over.
    pub observations: usize,

    // I. Return and dispersion
    /// Mean monthly return × 12.
    pub annualized_return: f64,
    /// Compound return over the whole analyzed window: ∏(1 + r) − 1.
    pub total_return: f64,
    /// Sample stdev of monthly returns × √12.
    pub annualized_volatility: f64,
    pub min_periodic_return: f64,
    pub max_periodic_return: f64,

    // II. Distribution shape
    pub skewness: f64,
    pub excess_kurtosis: f64,
    /// Jarque-Bera joint normality statistic and its chi-square(2) p-value.
    pub jarque_bera_stat: f64,
    pub jarque_bera_p_value: f64,

    // III. Tail risk
    /// Confidence level the VaR/CVaR fields are stated at (e.g., 0.95).
    pub confidence_level: f64,
    /// Monthly VaR: the (1 − confidence) quantile of the return distribution.
    pub value_at_risk: f64,
    /// Monthly VaR scaled by √12.
    pub value_at_risk_annualized: f64,
    /// Mean of the monthly returns at or below the VaR threshold.
    pub conditional_value_at_risk: f64,
    /// Monthly CVaR scaled by √12.
    pub conditional_value_at_risk_annualized: f64,
    /// Most negative peak-to-trough decline of the cumulative-growth curve.
    pub max_drawdown: f64,

    // IV. Risk-adjusted ratios
    pub sharpe: RatioValue,
    pub sortino: RatioValue,
    /// Present only when a reference series was supplied.
    pub beta: Option<BetaEstimate>,
}

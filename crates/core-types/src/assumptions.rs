use crate::PERIODS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// The risk-free rate assumption for an analysis run.
///
/// Held constant across a run and passed explicitly into every calculation
/// that needs it; there is no process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFreeAssumption {
    /// Annualized risk-free rate as a fraction (e.g., 0.065 for 6.5% a.a.).
    pub annual_rate: f64,
}

impl RiskFreeAssumption {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// The implied per-period (monthly) risk-free rate.
    pub fn per_period(&self) -> f64 {
        self.annual_rate / f64::from(PERIODS_PER_YEAR)
    }
}

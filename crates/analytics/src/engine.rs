use crate::error::AnalyticsError;
use crate::report::MetricsBundle;
use crate::stats;
use core_types::{BetaEstimate, PERIODS_PER_YEAR, ReturnSeries, RiskFreeAssumption};

/// Minimum observations for the Jarque-Bera normality test. Below this the
/// asymptotic chi-square approximation is meaningless, so the engine refuses
/// to compute it rather than report a silently wrong statistic.
pub const MIN_OBS_NORMALITY: usize = 8;

/// A stateless calculator for deriving risk/return metrics from a return series.
///
/// Every call is a pure function of its explicit inputs; there is no cached
/// state, so independent series (or the same series twice) can be evaluated
/// in any order, or concurrently, with identical results.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    confidence_level: f64,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

impl AnalyticsEngine {
    /// Creates an engine reporting VaR/CVaR at the default 95% confidence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine reporting tail risk at a custom confidence level.
    pub fn with_confidence_level(confidence_level: f64) -> Self {
        debug_assert!(confidence_level > 0.0 && confidence_level < 1.0);
        Self { confidence_level }
    }

    /// The main entry point: maps one return series (plus an optional
    /// market/benchmark series for beta) to a `MetricsBundle`.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` when the series is shorter than
    ///   [`MIN_OBS_NORMALITY`] observations.
    /// - `LengthMismatch` when a reference series is supplied and does not
    ///   cover exactly the same periods.
    pub fn analyze(
        &self,
        series: &ReturnSeries,
        reference: Option<&ReturnSeries>,
        risk_free: &RiskFreeAssumption,
    ) -> Result<MetricsBundle, AnalyticsError> {
        let returns = series.returns();
        if returns.len() < MIN_OBS_NORMALITY {
            return Err(AnalyticsError::InsufficientData {
                metric: "jarque_bera",
                required: MIN_OBS_NORMALITY,
                actual: returns.len(),
            });
        }
        if let Some(reference) = reference {
            if !series.is_aligned_with(reference) {
                return Err(AnalyticsError::LengthMismatch {
                    asset: series.len(),
                    reference: reference.len(),
                });
            }
        }
        tracing::debug!(
            observations = returns.len(),
            confidence = self.confidence_level,
            "computing metrics bundle"
        );

        let annualized_return = stats::annualized_return(returns);
        let annualized_volatility = stats::annualized_volatility(returns);
        let (jarque_bera_stat, jarque_bera_p_value) = stats::jarque_bera(returns);
        let (value_at_risk, conditional_value_at_risk) = self.tail_risk(returns);
        let sqrt_periods = f64::from(PERIODS_PER_YEAR).sqrt();

        let min_periodic_return = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max_periodic_return = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let downside_dev = stats::downside_deviation(returns, risk_free.per_period());

        Ok(MetricsBundle {
            observations: returns.len(),
            annualized_return,
            total_return: stats::total_compound_return(returns),
            annualized_volatility,
            min_periodic_return,
            max_periodic_return,
            skewness: stats::skewness(returns),
            excess_kurtosis: stats::excess_kurtosis(returns),
            jarque_bera_stat,
            jarque_bera_p_value,
            confidence_level: self.confidence_level,
            value_at_risk,
            value_at_risk_annualized: value_at_risk * sqrt_periods,
            conditional_value_at_risk,
            conditional_value_at_risk_annualized: conditional_value_at_risk * sqrt_periods,
            max_drawdown: stats::max_drawdown(returns),
            sharpe: stats::sharpe_ratio(
                annualized_return,
                annualized_volatility,
                risk_free.annual_rate,
            ),
            sortino: stats::sortino_ratio(annualized_return, downside_dev, risk_free.annual_rate),
            beta: reference.map(|r| self.beta(returns, r.returns())),
        })
    }

    /// Evaluates a batch of named series, isolating failures per unit: one
    /// series failing with `InsufficientData` never blocks its siblings.
    /// Output order follows input order.
    pub fn analyze_batch(
        &self,
        series: &[(&str, &ReturnSeries)],
        reference: Option<&ReturnSeries>,
        risk_free: &RiskFreeAssumption,
    ) -> Vec<(String, Result<MetricsBundle, AnalyticsError>)> {
        series
            .iter()
            .map(|(name, s)| (name.to_string(), self.analyze(s, reference, risk_free)))
            .collect()
    }

    /// Periodic VaR at this engine's confidence level, and the CVaR over the
    /// observations at or below it.
    fn tail_risk(&self, returns: &[f64]) -> (f64, f64) {
        let var = stats::value_at_risk(returns, self.confidence_level);
        let cvar = stats::conditional_value_at_risk(returns, var);
        (var, cvar)
    }

    /// Beta as sample covariance over sample reference variance. A
    /// zero-variance reference yields the tagged unit fallback.
    fn beta(&self, asset: &[f64], reference: &[f64]) -> BetaEstimate {
        let reference_variance = stats::sample_variance(reference);
        if reference_variance == 0.0 {
            tracing::warn!("reference series has zero variance; reporting beta unit fallback");
            return BetaEstimate::UnitFallback;
        }
        BetaEstimate::Estimated(stats::sample_covariance(asset, reference) / reference_variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use core_types::RatioValue;

    fn monthly_series(returns: &[f64]) -> ReturnSeries {
        let dates = (0..returns.len())
            .map(|i| {
                NaiveDate::from_ymd_opt(2018 + i as i32 / 12, (i as u32 % 12) + 1, 28).unwrap()
            })
            .collect();
        ReturnSeries::new(dates, returns.to_vec()).unwrap()
    }

    fn rf() -> RiskFreeAssumption {
        RiskFreeAssumption::new(0.065)
    }

    #[test]
    fn constant_series_has_zero_volatility_and_undefined_ratios() {
        let series = monthly_series(&[0.01; 12]);
        let bundle = AnalyticsEngine::new().analyze(&series, None, &rf()).unwrap();

        assert_eq!(bundle.annualized_volatility, 0.0);
        assert_relative_eq!(bundle.annualized_return, 0.12, epsilon = 1e-12);
        assert_eq!(bundle.sharpe, RatioValue::Undefined);
        // 0.01 monthly beats the monthly risk-free rate, so no downside either.
        assert_eq!(bundle.sortino, RatioValue::Undefined);
    }

    #[test]
    fn twelve_zero_months_with_positive_risk_free() {
        let series = monthly_series(&[0.0; 12]);
        let bundle = AnalyticsEngine::new().analyze(&series, None, &rf()).unwrap();

        assert_eq!(bundle.annualized_return, 0.0);
        assert_eq!(bundle.sharpe, RatioValue::Undefined);
        assert_eq!(bundle.max_drawdown, 0.0);
    }

    #[test]
    fn short_series_fails_with_insufficient_data() {
        let series = monthly_series(&[0.01, 0.02, -0.01, 0.03, 0.0, 0.01, 0.02]);
        let err = AnalyticsEngine::new()
            .analyze(&series, None, &rf())
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InsufficientData {
                required: MIN_OBS_NORMALITY,
                actual: 7,
                ..
            }
        ));
    }

    #[test]
    fn misaligned_reference_fails_loudly() {
        let asset = monthly_series(&[0.01, 0.02, -0.01, 0.03, 0.0, 0.01, 0.02, -0.02]);
        let reference = monthly_series(&[0.01; 9]);
        let err = AnalyticsEngine::new()
            .analyze(&asset, Some(&reference), &rf())
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::LengthMismatch { .. }));
    }

    #[test]
    fn beta_against_itself_is_one() {
        let series = monthly_series(&[0.03, -0.02, 0.01, 0.04, -0.01, 0.02, 0.00, 0.05]);
        let bundle = AnalyticsEngine::new()
            .analyze(&series, Some(&series), &rf())
            .unwrap();
        match bundle.beta {
            Some(BetaEstimate::Estimated(b)) => assert_relative_eq!(b, 1.0, epsilon = 1e-12),
            other => panic!("expected an estimated beta, got {other:?}"),
        }
    }

    #[test]
    fn flat_reference_triggers_the_tagged_unit_fallback() {
        let asset = monthly_series(&[0.03, -0.02, 0.01, 0.04, -0.01, 0.02, 0.00, 0.05]);
        let reference = asset.with_returns(vec![0.01; 8]).unwrap();
        let bundle = AnalyticsEngine::new()
            .analyze(&asset, Some(&reference), &rf())
            .unwrap();
        assert_eq!(bundle.beta, Some(BetaEstimate::UnitFallback));
        assert_eq!(bundle.beta.unwrap().value(), 1.0);
    }

    #[test]
    fn analyze_is_idempotent() {
        let series = monthly_series(&[
            0.021, -0.013, 0.034, 0.008, -0.025, 0.017, 0.002, 0.041, -0.009, 0.012, 0.027, -0.004,
        ]);
        let engine = AnalyticsEngine::new();
        let first = engine.analyze(&series, None, &rf()).unwrap();
        let second = engine.analyze(&series, None, &rf()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_isolates_failing_units() {
        let good = monthly_series(&[0.01, 0.02, -0.01, 0.03, 0.0, 0.01, 0.02, -0.02]);
        let short = monthly_series(&[0.01, 0.02]);
        let results =
            AnalyticsEngine::new().analyze_batch(&[("good", &good), ("short", &short)], None, &rf());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "good");
        assert!(results[0].1.is_ok());
        assert!(matches!(
            results[1].1,
            Err(AnalyticsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn min_max_and_drawdown_fields() {
        let series = monthly_series(&[0.10, -0.20, 0.10, 0.20, 0.01, 0.0, 0.02, -0.01]);
        let bundle = AnalyticsEngine::new().analyze(&series, None, &rf()).unwrap();
        assert_eq!(bundle.min_periodic_return, -0.20);
        assert_eq!(bundle.max_periodic_return, 0.20);
        assert_relative_eq!(bundle.max_drawdown, -0.20, epsilon = 1e-12);
        assert!(bundle.max_drawdown >= -1.0 && bundle.max_drawdown <= 0.0);
    }
}

use crate::error::CostError;
use crate::report::CostAdjustedResult;
use crate::scenario::{CostScenario, GrossPerformance, TurnoverAssumption};
use analytics::stats;
use core_types::{PERIODS_PER_YEAR, RiskFreeAssumption};
use std::collections::HashMap;

/// A stateless calculator that derives net-of-cost performance from gross
/// monthly returns, a turnover assumption, and a cost scenario.
///
/// The cost model is a uniform drag: the annual cost implied by turnover and
/// the per-trade rate is smoothed evenly across all twelve months rather than
/// charged in the months that actually contain a rebalancing event. This is a
/// deliberate simplification carried over from the reference methodology, not
/// a bug; a more precise model would charge cost only in rebalancing periods.
///
/// Each (strategy, scenario) pair is evaluated independently with no shared
/// accumulator, so scenarios can run in any order, or concurrently, with
/// identical results.
#[derive(Debug, Clone)]
pub struct TransactionCostModel {
    risk_free: RiskFreeAssumption,
}

impl TransactionCostModel {
    pub fn new(risk_free: RiskFreeAssumption) -> Self {
        Self { risk_free }
    }

    /// Applies one cost scenario to one strategy's gross performance.
    ///
    /// The drag is `annual_turnover × (cost_bps / 10000) × rebalancing
    /// frequency`, deducted from every month as a flat `annual_cost / 12`.
    /// Net return, volatility, and Sharpe are recomputed on the adjusted
    /// series with the same estimators the analytics engine uses on gross
    /// series.
    pub fn apply(
        &self,
        strategy: &str,
        gross: &GrossPerformance,
        turnover: &TurnoverAssumption,
        scenario: &CostScenario,
    ) -> CostAdjustedResult {
        let cost_per_rebalancing = turnover.annual_turnover * scenario.cost_rate();
        let annual_cost = cost_per_rebalancing * f64::from(turnover.rebalancing_frequency);
        let monthly_cost = annual_cost / f64::from(PERIODS_PER_YEAR);

        let net_returns: Vec<f64> = gross
            .monthly_returns
            .returns()
            .iter()
            .map(|r| r - monthly_cost)
            .collect();

        let net_annual_return = stats::annualized_return(&net_returns);
        let net_volatility = stats::annualized_volatility(&net_returns);
        let cost_impact_bps = (gross.annual_return - net_annual_return) * 10_000.0;

        tracing::debug!(
            strategy,
            scenario = %scenario.label,
            cost_bps = scenario.cost_bps,
            annual_cost,
            cost_impact_bps,
            "applied transaction-cost scenario"
        );

        CostAdjustedResult {
            strategy: strategy.to_string(),
            scenario: scenario.label.clone(),
            cost_bps: scenario.cost_bps,
            gross_annual_return: gross.annual_return,
            net_annual_return,
            annual_cost,
            cost_impact_bps,
            net_volatility,
            net_sharpe: stats::sharpe_ratio(
                net_annual_return,
                net_volatility,
                self.risk_free.annual_rate,
            ),
            annual_turnover: turnover.annual_turnover,
            rebalancing_frequency: turnover.rebalancing_frequency,
        }
    }

    /// Looks up one strategy in the supplied gross-performance and turnover
    /// tables and applies a scenario to it.
    ///
    /// # Errors
    ///
    /// `UnknownStrategy` when the strategy is missing from either table; the
    /// model never substitutes a default turnover.
    pub fn analyze_strategy(
        &self,
        strategy: &str,
        gross_by_strategy: &HashMap<String, GrossPerformance>,
        turnover_by_strategy: &HashMap<String, TurnoverAssumption>,
        scenario: &CostScenario,
    ) -> Result<CostAdjustedResult, CostError> {
        let gross = gross_by_strategy
            .get(strategy)
            .ok_or_else(|| CostError::UnknownStrategy(strategy.to_string()))?;
        let turnover = turnover_by_strategy
            .get(strategy)
            .ok_or_else(|| CostError::UnknownStrategy(strategy.to_string()))?;
        Ok(self.apply(strategy, gross, turnover, scenario))
    }

    /// Evaluates every requested strategy under every scenario.
    ///
    /// Results follow the order of `strategies` crossed with `scenarios`, one
    /// entry per pair. A strategy missing from the tables yields an
    /// `UnknownStrategy` entry for each of its pairs without disturbing any
    /// sibling pair.
    pub fn analyze_all(
        &self,
        strategies: &[&str],
        gross_by_strategy: &HashMap<String, GrossPerformance>,
        turnover_by_strategy: &HashMap<String, TurnoverAssumption>,
        scenarios: &[CostScenario],
    ) -> Vec<Result<CostAdjustedResult, CostError>> {
        strategies
            .iter()
            .flat_map(|strategy| {
                scenarios.iter().map(|scenario| {
                    self.analyze_strategy(
                        strategy,
                        gross_by_strategy,
                        turnover_by_strategy,
                        scenario,
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use core_types::{RatioValue, ReturnSeries};

    fn monthly_series(returns: &[f64]) -> ReturnSeries {
        let dates = (0..returns.len())
            .map(|i| {
                NaiveDate::from_ymd_opt(2018 + i as i32 / 12, (i as u32 % 12) + 1, 28).unwrap()
            })
            .collect();
        ReturnSeries::new(dates, returns.to_vec()).unwrap()
    }

    fn model() -> TransactionCostModel {
        TransactionCostModel::new(RiskFreeAssumption::new(0.065))
    }

    fn sample_gross() -> GrossPerformance {
        let returns = [
            0.021, -0.013, 0.034, 0.008, -0.025, 0.017, 0.002, 0.041, -0.009, 0.012, 0.027, -0.004,
        ];
        let series = monthly_series(&returns);
        let annual = stats::annualized_return(series.returns());
        GrossPerformance::new(annual, series)
    }

    #[test]
    fn base_scenario_matches_hand_computed_drag() {
        // turnover 0.30, 15 bps: cost_per_rebalancing = 0.30 * 0.0015 = 0.00045,
        // annual_cost = 0.0009 at two rebalancings, monthly_cost = 0.000075.
        let gross = sample_gross();
        let turnover = TurnoverAssumption::new(0.30, 2);
        let scenario = CostScenario::new("Base", 15.0);

        let result = model().apply("Risk Parity", &gross, &turnover, &scenario);

        assert_relative_eq!(result.annual_cost, 0.0009, epsilon = 1e-15);
        assert_relative_eq!(
            result.net_annual_return,
            gross.annual_return - 0.0009,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.cost_impact_bps, 9.0, epsilon = 1e-9);

        // The drag is flat: every net month is gross minus 0.000075.
        let monthly_cost = 0.0009 / 12.0;
        let expected_first = gross.monthly_returns.returns()[0] - monthly_cost;
        let net_mean = result.net_annual_return / 12.0;
        let gross_mean = stats::mean(gross.monthly_returns.returns());
        assert_relative_eq!(net_mean, gross_mean - monthly_cost, epsilon = 1e-12);
        assert_relative_eq!(expected_first, 0.021 - 0.000075, epsilon = 1e-15);
    }

    #[test]
    fn flat_deduction_leaves_volatility_unchanged() {
        let gross = sample_gross();
        let turnover = TurnoverAssumption::new(0.423, 2);
        let scenario = CostScenario::new("High", 30.0);

        let result = model().apply("Markowitz", &gross, &turnover, &scenario);
        let gross_vol = stats::annualized_volatility(gross.monthly_returns.returns());
        assert_relative_eq!(result.net_volatility, gross_vol, epsilon = 1e-12);
    }

    #[test]
    fn net_return_is_strictly_decreasing_in_cost_bps() {
        let gross = sample_gross();
        let turnover = TurnoverAssumption::new(0.30, 2);
        let m = model();

        let nets: Vec<f64> = CostScenario::default_set()
            .iter()
            .map(|s| m.apply("Equal Weight", &gross, &turnover, s).net_annual_return)
            .collect();

        assert!(nets[0] > nets[1] && nets[1] > nets[2]);
    }

    #[test]
    fn unknown_strategy_fails_loudly_without_blocking_siblings() {
        let mut gross_map = HashMap::new();
        gross_map.insert("Risk Parity".to_string(), sample_gross());
        let mut turnover_map = HashMap::new();
        turnover_map.insert("Risk Parity".to_string(), TurnoverAssumption::new(0.299, 2));

        let scenarios = CostScenario::default_set();
        let results = model().analyze_all(
            &["Risk Parity", "Momentum"],
            &gross_map,
            &turnover_map,
            &scenarios,
        );

        assert_eq!(results.len(), 6);
        assert!(results[..3].iter().all(Result::is_ok));
        for r in &results[3..] {
            match r {
                Err(CostError::UnknownStrategy(name)) => assert_eq!(name, "Momentum"),
                other => panic!("expected UnknownStrategy, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_turnover_is_an_unknown_strategy_not_a_default() {
        let mut gross_map = HashMap::new();
        gross_map.insert("Equal Weight".to_string(), sample_gross());
        let turnover_map = HashMap::new();

        let err = model()
            .analyze_strategy(
                "Equal Weight",
                &gross_map,
                &turnover_map,
                &CostScenario::new("Base", 15.0),
            )
            .unwrap_err();
        assert!(matches!(err, CostError::UnknownStrategy(_)));
    }

    #[test]
    fn scenario_order_does_not_change_results() {
        let gross = sample_gross();
        let turnover = TurnoverAssumption::new(0.167, 2);
        let m = model();
        let mut scenarios = CostScenario::default_set();

        let forward: Vec<_> = scenarios
            .iter()
            .map(|s| m.apply("Equal Weight", &gross, &turnover, s))
            .collect();
        scenarios.reverse();
        let mut backward: Vec<_> = scenarios
            .iter()
            .map(|s| m.apply("Equal Weight", &gross, &turnover, s))
            .collect();
        backward.reverse();

        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_volatility_net_sharpe_is_undefined() {
        let series = monthly_series(&[0.002; 12]);
        let gross = GrossPerformance::new(0.024, series);
        let result = model().apply(
            "Constant",
            &gross,
            &TurnoverAssumption::new(0.30, 2),
            &CostScenario::new("Base", 15.0),
        );
        assert_eq!(result.net_sharpe, RatioValue::Undefined);
    }
}

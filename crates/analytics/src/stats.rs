//! Estimator primitives shared by the analytics engine and the cost model.
//!
//! Conventions, applied uniformly across the workspace:
//! - Variance, standard deviation, and covariance are sample estimators
//!   (ddof = 1).
//! - Skewness and excess kurtosis use the population-moment estimators the
//!   Jarque-Bera statistic is defined over.
//! - Annualization assumes monthly periods: mean × 12, stdev × √12.

use core_types::{PERIODS_PER_YEAR, RatioValue};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Minimum observations for any variance-based statistic.
pub const MIN_OBS_VARIANCE: usize = 2;

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// An all-equal series has zero dispersion regardless of how its mean rounds.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Sample variance (ddof = 1). Requires at least two observations.
pub fn sample_variance(values: &[f64]) -> f64 {
    debug_assert!(values.len() >= MIN_OBS_VARIANCE);
    if is_constant(values) {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation (ddof = 1).
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Sample covariance (ddof = 1) of two equal-length slices.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert!(x.len() == y.len() && x.len() >= MIN_OBS_VARIANCE);
    let mx = mean(x);
    let my = mean(y);
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mx) * (b - my))
        .sum::<f64>()
        / (x.len() - 1) as f64
}

/// Annualized mean return: mean of the monthly returns × 12.
pub fn annualized_return(returns: &[f64]) -> f64 {
    mean(returns) * f64::from(PERIODS_PER_YEAR)
}

/// Annualized volatility: sample stdev of the monthly returns × √12.
pub fn annualized_volatility(returns: &[f64]) -> f64 {
    sample_std(returns) * f64::from(PERIODS_PER_YEAR).sqrt()
}

/// Compound return over the whole series: ∏(1 + r) − 1.
pub fn total_compound_return(returns: &[f64]) -> f64 {
    returns.iter().map(|r| 1.0 + r).product::<f64>() - 1.0
}

/// Quantile with linear interpolation between order statistics, `q` in [0, 1].
///
/// Matches the numpy default: the quantile sits at rank `q × (n − 1)` of the
/// ascending-sorted sample, interpolating between the two nearest order
/// statistics.
pub fn quantile_linear(values: &[f64], q: f64) -> f64 {
    debug_assert!(!values.is_empty() && (0.0..=1.0).contains(&q));
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * weight
}

/// Periodic Value-at-Risk at the given confidence level: the
/// `(1 − confidence)` quantile of the return distribution.
pub fn value_at_risk(returns: &[f64], confidence: f64) -> f64 {
    quantile_linear(returns, 1.0 - confidence)
}

/// Periodic Conditional VaR: the mean of all returns at or below `var`.
///
/// On a degenerate short series where no observation falls at or below the
/// threshold, CVaR equals VaR.
pub fn conditional_value_at_risk(returns: &[f64], var: f64) -> f64 {
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var).collect();
    if tail.is_empty() { var } else { mean(&tail) }
}

/// Third standardized moment (population estimator).
///
/// A constant series carries no shape information; its skewness is reported
/// as 0.
pub fn skewness(values: &[f64]) -> f64 {
    if is_constant(values) {
        return 0.0;
    }
    let m = mean(values);
    let n = values.len() as f64;
    let m2 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return 0.0;
    }
    let m3 = values.iter().map(|v| (v - m).powi(3)).sum::<f64>() / n;
    m3 / m2.powf(1.5)
}

/// Fourth standardized moment minus 3 (population estimator).
///
/// A constant series carries no shape information; its excess kurtosis is
/// reported as 0.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    if is_constant(values) {
        return 0.0;
    }
    let m = mean(values);
    let n = values.len() as f64;
    let m2 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return 0.0;
    }
    let m4 = values.iter().map(|v| (v - m).powi(4)).sum::<f64>() / n;
    m4 / (m2 * m2) - 3.0
}

/// Jarque-Bera normality test: the joint skewness/kurtosis statistic and its
/// asymptotic chi-square(2) p-value.
pub fn jarque_bera(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let s = skewness(values);
    let k = excess_kurtosis(values);
    let stat = n / 6.0 * (s * s + k * k / 4.0);

    let chi2 = ChiSquared::new(2.0).expect("valid chi-square dof");
    let p_value = 1.0 - chi2.cdf(stat);
    (stat, p_value)
}

/// Maximum drawdown of the cumulative-growth curve built from the returns.
///
/// The curve is ∏(1 + r) up to each period; drawdown at t is
/// `(cum_t − peak_t) / peak_t` against the running peak. The result is the
/// most negative drawdown, always in [−1, 0]; it is 0 for a series whose
/// cumulative curve never declines.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut cumulative = 1.0_f64;
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;
    for r in returns {
        cumulative *= 1.0 + r;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = (cumulative - peak) / peak;
        if drawdown < worst {
            worst = drawdown;
        }
    }
    worst
}

/// Sharpe ratio over annualized figures; `Undefined` when volatility is 0.
pub fn sharpe_ratio(annual_return: f64, annual_volatility: f64, rf_annual: f64) -> RatioValue {
    RatioValue::from_parts(annual_return - rf_annual, annual_volatility)
}

/// Annualized downside deviation: √(mean((r − rf_period)²)) × √12 over the
/// periods whose return is strictly below the per-period risk-free rate.
///
/// Zero when no period falls below the threshold.
pub fn downside_deviation(returns: &[f64], rf_period: f64) -> f64 {
    let below: Vec<f64> = returns
        .iter()
        .copied()
        .filter(|r| *r < rf_period)
        .map(|r| (r - rf_period) * (r - rf_period))
        .collect();
    if below.is_empty() {
        return 0.0;
    }
    (mean(&below)).sqrt() * f64::from(PERIODS_PER_YEAR).sqrt()
}

/// Sortino ratio over annualized figures; `Undefined` when the downside
/// deviation is 0 (no sub-threshold periods).
pub fn sortino_ratio(annual_return: f64, downside_dev: f64, rf_annual: f64) -> RatioValue {
    RatioValue::from_parts(annual_return - rf_annual, downside_dev)
}

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A ratio metric that may be undefined because its denominator is zero.
///
/// A zero-volatility Sharpe or a no-downside Sortino is reported as
/// `Undefined`, never as 0, NaN, or infinity, so a consumer can always tell
/// "computed as zero" apart from "not defined for this series".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RatioValue {
    Defined(f64),
    Undefined,
}

impl RatioValue {
    /// Forms `numerator / denominator`, tagging a zero denominator as
    /// `Undefined`.
    pub fn from_parts(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            RatioValue::Undefined
        } else {
            RatioValue::Defined(numerator / denominator)
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, RatioValue::Defined(_))
    }

    /// The value as an `Option`, for consumers that render undefined ratios
    /// as an "N/A" marker.
    pub fn value(&self) -> Option<f64> {
        match self {
            RatioValue::Defined(v) => Some(*v),
            RatioValue::Undefined => None,
        }
    }

    /// The value, or a typed `UndefinedRatio` failure for callers that
    /// require a number.
    pub fn defined_or(&self, metric: &str) -> Result<f64, CoreError> {
        self.value().ok_or_else(|| CoreError::UndefinedRatio {
            metric: metric.to_string(),
        })
    }
}

/// A beta estimate against a reference series.
///
/// When the reference series has zero variance, beta is reported as 1.0 by
/// convention; the `UnitFallback` variant keeps that policy visible to the
/// caller instead of blending it into an estimated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum BetaEstimate {
    Estimated(f64),
    UnitFallback,
}

impl BetaEstimate {
    /// The beta value, with the fallback convention applied.
    pub fn value(&self) -> f64 {
        match self {
            BetaEstimate::Estimated(b) => *b,
            BetaEstimate::UnitFallback => 1.0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BetaEstimate::UnitFallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_undefined_not_infinite() {
        assert_eq!(RatioValue::from_parts(0.151, 0.0), RatioValue::Undefined);
        assert_eq!(
            RatioValue::from_parts(-0.065, 0.0).value(),
            None,
            "a negative numerator over zero must not become -inf"
        );
    }

    #[test]
    fn defined_or_surfaces_the_metric_name() {
        let err = RatioValue::Undefined.defined_or("sharpe").unwrap_err();
        assert!(err.to_string().contains("sharpe"));
    }

    #[test]
    fn unit_fallback_is_distinguishable_from_an_estimated_one() {
        let estimated = BetaEstimate::Estimated(1.0);
        let fallback = BetaEstimate::UnitFallback;
        assert_eq!(estimated.value(), fallback.value());
        assert!(!estimated.is_fallback());
        assert!(fallback.is_fallback());
    }
}

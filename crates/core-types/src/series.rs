use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered series of periodic (monthly) fractional returns, indexed by
/// period-end date.
///
/// The series is validated at construction: the date index and the return
/// values must have the same length, dates must be strictly chronological
/// (which also rules out duplicate periods), and every return must be finite.
/// The fields are private so a constructed series can never drift out of
/// that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<NaiveDate>,
    returns: Vec<f64>,
}

impl ReturnSeries {
    /// Builds a series from parallel date and return vectors.
    pub fn new(dates: Vec<NaiveDate>, returns: Vec<f64>) -> Result<Self, CoreError> {
        if dates.len() != returns.len() {
            return Err(CoreError::MisalignedIndex {
                dates: dates.len(),
                returns: returns.len(),
            });
        }
        for pair in dates.windows(2) {
            if pair[0] >= pair[1] {
                return Err(CoreError::UnorderedDates {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        if let Some(pos) = returns.iter().position(|r| !r.is_finite()) {
            return Err(CoreError::NonFiniteReturn(pos));
        }
        Ok(Self { dates, returns })
    }

    /// Builds a series from `(period-end date, return)` pairs.
    pub fn from_pairs(pairs: Vec<(NaiveDate, f64)>) -> Result<Self, CoreError> {
        let (dates, returns) = pairs.into_iter().unzip();
        Self::new(dates, returns)
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// The periodic fractional returns, in chronological order.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// The period-end date index, in chronological order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns a new series with the same date index and the given returns.
    ///
    /// Used by the cost model to pair a cost-adjusted return vector with the
    /// original calendar. Fails if the vector length does not match.
    pub fn with_returns(&self, returns: Vec<f64>) -> Result<Self, CoreError> {
        Self::new(self.dates.clone(), returns)
    }

    /// True when `other` covers exactly the same periods as `self`.
    pub fn is_aligned_with(&self, other: &ReturnSeries) -> bool {
        self.dates == other.dates
    }
}

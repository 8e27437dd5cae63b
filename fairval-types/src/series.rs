//! Ordered per-period series for a single financial line item.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FairvalError;

/// One reporting period and its value, if reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// End date of the reporting period.
    pub period: NaiveDate,
    /// Reported value; `None` when the provider left the line item empty.
    pub value: Option<f64>,
}

/// A line item (revenue, net income, ...) across reporting periods.
///
/// Invariant: periods are strictly increasing. Absent values keep their
/// period so that series stay alignable by date after filtering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct FinancialSeries {
    points: Vec<Observation>,
}

impl FinancialSeries {
    /// An empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from observations that are already in ascending order.
    ///
    /// # Errors
    /// Returns `Data` if periods are not strictly increasing.
    pub fn try_from_points(points: Vec<Observation>) -> Result<Self, FairvalError> {
        if let Some(w) = points.windows(2).find(|w| w[0].period >= w[1].period) {
            return Err(FairvalError::Data(format!(
                "series periods must be strictly increasing: {} then {}",
                w[0].period, w[1].period
            )));
        }
        Ok(Self { points })
    }

    /// Build a series from observations in any order.
    ///
    /// Points are sorted ascending; for duplicate periods the first reported
    /// observation wins.
    #[must_use]
    pub fn from_unordered(mut points: Vec<Observation>) -> Self {
        points.sort_by_key(|p| p.period);
        points.dedup_by_key(|p| p.period);
        Self { points }
    }

    /// Number of periods, including ones with absent values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in ascending period order.
    #[must_use]
    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    /// Value reported for `period`, if present.
    #[must_use]
    pub fn get(&self, period: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&period, |p| p.period)
            .ok()
            .and_then(|i| self.points[i].value)
    }

    /// Iterate over `(period, value)` for periods that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|v| (p.period, v)))
    }

    /// Values for periods that carry one, oldest first.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.present().map(|(_, v)| v).collect()
    }

    /// A copy with absent-value periods removed.
    #[must_use]
    pub fn dropna(&self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|p| p.value.is_some())
                .collect(),
        }
    }

    /// Most recent period that carries a value.
    #[must_use]
    pub fn latest(&self) -> Option<(NaiveDate, f64)> {
        self.present().last()
    }

    /// Latest period in the series regardless of value presence.
    #[must_use]
    pub fn last_period(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.period)
    }
}

impl TryFrom<Vec<Observation>> for FinancialSeries {
    type Error = FairvalError;

    fn try_from(points: Vec<Observation>) -> Result<Self, Self::Error> {
        Self::try_from_points(points)
    }
}

impl From<FinancialSeries> for Vec<Observation> {
    fn from(s: FinancialSeries) -> Self {
        s.points
    }
}

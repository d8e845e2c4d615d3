//! Value types shared across the engine.

use chrono::{DateTime, NaiveDate, Utc};

use crate::units::WeightUnit;

/// One logged weight entry. Immutable; the engine only reads samples.
/// Several samples may share a calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSample {
    pub timestamp: DateTime<Utc>,
    pub weight: f64,
    pub unit: WeightUnit,
}

impl WeightSample {
    pub fn new(timestamp: DateTime<Utc>, weight: f64, unit: WeightUnit) -> Self {
        Self {
            timestamp,
            weight,
            unit,
        }
    }

    /// Weight expressed in `unit`.
    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        WeightUnit::convert(self.weight, self.unit, unit)
    }
}

/// One point of the smoothed trend line.
///
/// Weights are stored unit-agnostic (canonical pounds); read them through the
/// unit-aware accessors.
#[derive(Debug, Clone, Copy)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Raw (or day-averaged) weight in canonical pounds.
    pub raw_weight: f64,
    /// EWMA-smoothed weight in canonical pounds.
    pub smoothed_weight: f64,
    /// Day-over-day rate, populated by consumers that difference successive
    /// points. The smoother itself leaves this `None`.
    pub trend_rate: Option<f64>,
}

impl TrendPoint {
    pub fn raw_weight_in(&self, unit: WeightUnit) -> f64 {
        WeightUnit::convert(self.raw_weight, WeightUnit::Pounds, unit)
    }

    pub fn smoothed_weight_in(&self, unit: WeightUnit) -> f64 {
        WeightUnit::convert(self.smoothed_weight, WeightUnit::Pounds, unit)
    }
}

// trend_rate is excluded on purpose: two points with the same date and weights
// are the same point whether or not a consumer has filled in the derived rate.
impl PartialEq for TrendPoint {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.raw_weight == other.raw_weight
            && self.smoothed_weight == other.smoothed_weight
    }
}

/// A milestone the user has already completed, as persisted by the store
/// collaborator. Read-only input to the engine; only the store flips
/// `celebration_shown` after the celebration has been displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedMilestoneRecord {
    pub target_weight: f64,
    pub unit: WeightUnit,
    pub achieved_date: NaiveDate,
    pub start_weight: f64,
    pub celebration_shown: bool,
}

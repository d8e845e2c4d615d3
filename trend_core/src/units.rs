//! Mass units, fixed conversion factors, and milestone spacing.

/// Pounds to kilograms.
pub const LB_TO_KG: f64 = 0.453592;
/// Kilograms to pounds. Not the exact reciprocal of [`LB_TO_KG`]; round-trip
/// conversion drifts by a small bounded amount (~0.005 over 10 round trips).
/// Downstream behavior depends on that exact drift, so neither factor may be
/// "corrected" to the other's reciprocal.
pub const KG_TO_LB: f64 = 2.20462;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// Convert `value` between units. Identity when `from == to`; otherwise a
    /// single multiply by the directional factor. No plausibility checks here.
    pub fn convert(value: f64, from: Self, to: Self) -> f64 {
        if from == to {
            return value;
        }
        match from {
            Self::Pounds => value * LB_TO_KG,
            Self::Kilograms => value * KG_TO_LB,
        }
    }
}

/// Milestone spacing preference.
///
/// The pound and kilogram step sizes are deliberately non-linear
/// (5/10/15 lb vs 2/5/7 kg); they are product constants, not conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneInterval {
    Five,
    Ten,
    Fifteen,
}

impl MilestoneInterval {
    /// Step size in the given unit.
    pub fn value_for(self, unit: WeightUnit) -> f64 {
        match (self, unit) {
            (Self::Five, WeightUnit::Pounds) => 5.0,
            (Self::Ten, WeightUnit::Pounds) => 10.0,
            (Self::Fifteen, WeightUnit::Pounds) => 15.0,
            (Self::Five, WeightUnit::Kilograms) => 2.0,
            (Self::Ten, WeightUnit::Kilograms) => 5.0,
            (Self::Fifteen, WeightUnit::Kilograms) => 7.0,
        }
    }
}

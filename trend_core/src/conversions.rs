//! `From` implementations bridging `trend_config` types to `trend_core` types.
//!
//! Keeps the field-by-field mapping in one place instead of scattered at the
//! call sites that load configuration.

use crate::config::{ForecastCfg, PredictionCfg, SmoothingCfg};
use crate::units::{MilestoneInterval, WeightUnit};

// ── Smoothing ────────────────────────────────────────────────────────────────

impl From<&trend_config::Smoothing> for SmoothingCfg {
    fn from(c: &trend_config::Smoothing) -> Self {
        Self { lambda: c.lambda }
    }
}

// ── Forecast ─────────────────────────────────────────────────────────────────

impl From<&trend_config::Forecast> for ForecastCfg {
    fn from(c: &trend_config::Forecast) -> Self {
        Self {
            alpha: c.alpha,
            beta: c.beta,
        }
    }
}

// ── Prediction ───────────────────────────────────────────────────────────────

impl From<&trend_config::Prediction> for PredictionCfg {
    fn from(c: &trend_config::Prediction) -> Self {
        Self {
            goal_tolerance: c.goal_tolerance,
            min_distinct_days: c.min_distinct_days,
            max_horizon_days: c.max_horizon_days,
            min_span_hours: c.min_span_hours,
        }
    }
}

// ── Unit / interval enums ────────────────────────────────────────────────────

impl From<trend_config::Unit> for WeightUnit {
    fn from(u: trend_config::Unit) -> Self {
        match u {
            trend_config::Unit::Pounds => Self::Pounds,
            trend_config::Unit::Kilograms => Self::Kilograms,
        }
    }
}

impl From<trend_config::Interval> for MilestoneInterval {
    fn from(i: trend_config::Interval) -> Self {
        match i {
            trend_config::Interval::Five => Self::Five,
            trend_config::Interval::Ten => Self::Ten,
            trend_config::Interval::Fifteen => Self::Fifteen,
        }
    }
}

//! Runtime configuration for the analytics engine.
//!
//! These are the structs the engine consumes at call time. They are separate
//! from the TOML-deserialized schema in `trend_config`; see `conversions` for
//! the bridges.

/// EWMA smoothing configuration.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingCfg {
    /// Smoothing constant λ in (0.0, 1.0]. The 0.1 default is the classic
    /// Hacker's Diet constant; existing trend lines depend on it.
    pub lambda: f64,
}

impl Default for SmoothingCfg {
    fn default() -> Self {
        Self { lambda: 0.1 }
    }
}

/// Holt (level + trend) forecaster configuration.
#[derive(Debug, Clone, Copy)]
pub struct ForecastCfg {
    /// Level smoothing constant α in (0.0, 1.0].
    pub alpha: f64,
    /// Trend smoothing constant β in (0.0, 1.0].
    pub beta: f64,
}

impl Default for ForecastCfg {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
        }
    }
}

/// Goal-date prediction thresholds.
#[derive(Debug, Clone, Copy)]
pub struct PredictionCfg {
    /// Within this many display units of the goal counts as "at goal".
    pub goal_tolerance: f64,
    /// Distinct calendar days required before a date is predicted.
    pub min_distinct_days: usize,
    /// Time-to-goal beyond this many days is classified as too slow.
    pub max_horizon_days: f64,
    /// Minimum first-to-last sample span (hours); guards against
    /// same-instant duplicate entries destabilizing the regression.
    pub min_span_hours: f64,
}

impl Default for PredictionCfg {
    fn default() -> Self {
        Self {
            goal_tolerance: 0.5,
            min_distinct_days: 7,
            max_horizon_days: 730.0,
            min_span_hours: 1.0,
        }
    }
}

//! Holt double-exponential (level + trend) forecasting.

use chrono::NaiveDate;

use crate::config::ForecastCfg;
use crate::error::TrendError;
use crate::types::WeightSample;
use crate::units::WeightUnit;

/// Level/trend estimate at the last sample, usable for linear extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltResult {
    /// Smoothed level in canonical pounds.
    pub level: f64,
    /// Per-day trend rate in canonical pounds.
    pub trend: f64,
    /// Calendar day of the last sample the fit consumed.
    pub last_date: NaiveDate,
}

impl HoltResult {
    /// Linear forecast: `level + trend × days_ahead`. `forecast(0.0)` is the
    /// level exactly.
    pub fn forecast(&self, days_ahead: f64) -> f64 {
        self.level + self.trend * days_ahead
    }
}

/// Holt forecaster over a time-ordered weight series.
///
/// Initialization: `level₀ = raw[0]`, `trend₀ = raw[1] − raw[0]`. For i ≥ 1:
/// `level_i = α·raw[i] + (1−α)·(level_{i−1} + trend_{i−1})`,
/// `trend_i = β·(level_i − level_{i−1}) + (1−β)·trend_{i−1}`.
#[derive(Debug, Clone, Copy)]
pub struct HoltForecaster {
    alpha: f64,
    beta: f64,
}

impl Default for HoltForecaster {
    fn default() -> Self {
        let cfg = ForecastCfg::default();
        Self {
            alpha: cfg.alpha,
            beta: cfg.beta,
        }
    }
}

impl HoltForecaster {
    /// Creates a forecaster with constants `alpha`, `beta` in (0.0, 1.0].
    pub fn new(alpha: f64, beta: f64) -> Result<Self, TrendError> {
        if !(alpha.is_finite() && alpha > 0.0 && alpha <= 1.0) {
            return Err(TrendError::InvalidSmoothing("alpha must be in (0.0, 1.0]"));
        }
        if !(beta.is_finite() && beta > 0.0 && beta <= 1.0) {
            return Err(TrendError::InvalidSmoothing("beta must be in (0.0, 1.0]"));
        }
        Ok(Self { alpha, beta })
    }

    pub fn from_cfg(cfg: &ForecastCfg) -> Result<Self, TrendError> {
        Self::new(cfg.alpha, cfg.beta)
    }

    /// Returns α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Fits the series. `None` for fewer than 2 samples.
    ///
    /// Samples are sorted by timestamp first, and every sample is normalized
    /// to canonical pounds before the recurrence; feeding unit-tagged values
    /// through unconverted is a known prior defect class.
    pub fn fit(&self, samples: &[WeightSample]) -> Option<HoltResult> {
        if samples.len() < 2 {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by_key(|s| s.timestamp);
        let raw: Vec<f64> = sorted
            .iter()
            .map(|s| s.weight_in(WeightUnit::Pounds))
            .collect();

        let mut level = raw[0];
        let mut trend = raw[1] - raw[0];
        for &x in &raw[1..] {
            let prev_level = level;
            level = self.alpha * x + (1.0 - self.alpha) * (prev_level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
        }

        // sorted has >= 2 elements here
        let last_date = sorted[sorted.len() - 1].timestamp.date_naive();
        Some(HoltResult {
            level,
            trend,
            last_date,
        })
    }
}

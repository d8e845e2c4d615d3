//! EWMA smoothing of the raw weight series into chart trend points.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::SmoothingCfg;
use crate::error::TrendError;
use crate::types::{TrendPoint, WeightSample};
use crate::units::WeightUnit;

/// Single-exponential smoother over a time-ordered weight series.
///
/// `trend[0] = raw[0]`, then `trend[i] = λ·raw[i] + (1−λ)·trend[i−1]`.
/// λ = 1.0 degenerates to the raw series, with exact equality.
#[derive(Debug, Clone, Copy)]
pub struct EwmaSmoother {
    lambda: f64,
}

impl Default for EwmaSmoother {
    fn default() -> Self {
        Self {
            lambda: SmoothingCfg::default().lambda,
        }
    }
}

impl EwmaSmoother {
    /// Creates a smoother with constant `lambda` in (0.0, 1.0].
    pub fn new(lambda: f64) -> Result<Self, TrendError> {
        if !(lambda.is_finite() && lambda > 0.0 && lambda <= 1.0) {
            return Err(TrendError::InvalidSmoothing("lambda must be in (0.0, 1.0]"));
        }
        Ok(Self { lambda })
    }

    pub fn from_cfg(cfg: &SmoothingCfg) -> Result<Self, TrendError> {
        Self::new(cfg.lambda)
    }

    /// Returns λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Smooths the samples into one [`TrendPoint`] per input sample.
    ///
    /// Samples are sorted by timestamp first; callers may pass unsorted data.
    /// Weights are normalized to canonical pounds before the recurrence.
    /// `trend_rate` is left `None`; consumers that need it difference
    /// successive points themselves.
    pub fn smooth(&self, samples: &[WeightSample]) -> Vec<TrendPoint> {
        let mut sorted = samples.to_vec();
        sorted.sort_by_key(|s| s.timestamp);

        let series: Vec<(NaiveDate, f64)> = sorted
            .iter()
            .map(|s| (s.timestamp.date_naive(), s.weight_in(WeightUnit::Pounds)))
            .collect();
        self.run(&series)
    }

    /// Same-day-aggregation variant: buckets samples into calendar days,
    /// averages each bucket's raw weight, then smooths the per-day series.
    ///
    /// A distinct entry point rather than a flag because it changes the unit
    /// of output: one point per day, not one point per sample.
    pub fn smooth_daily(&self, samples: &[WeightSample]) -> Vec<TrendPoint> {
        let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
        for s in samples {
            let entry = buckets.entry(s.timestamp.date_naive()).or_insert((0.0, 0));
            entry.0 += s.weight_in(WeightUnit::Pounds);
            entry.1 += 1;
        }

        let series: Vec<(NaiveDate, f64)> = buckets
            .into_iter()
            .map(|(date, (sum, n))| (date, sum / f64::from(n)))
            .collect();
        self.run(&series)
    }

    fn run(&self, series: &[(NaiveDate, f64)]) -> Vec<TrendPoint> {
        let mut out = Vec::with_capacity(series.len());
        let mut prev: Option<f64> = None;
        for &(date, raw) in series {
            let smoothed = match prev {
                None => raw,
                // λ = 1.0 must reproduce the raw value exactly, not via the
                // recurrence's rounding.
                Some(_) if self.lambda == 1.0 => raw,
                Some(p) => self.lambda * raw + (1.0 - self.lambda) * p,
            };
            prev = Some(smoothed);
            out.push(TrendPoint {
                date,
                raw_weight: raw,
                smoothed_weight: smoothed,
                trend_rate: None,
            });
        }
        out
    }
}

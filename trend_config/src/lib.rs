#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas for the trend analytics engine.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section carries serde defaults, so a partial (or empty) document
//!   yields the stock smoothing/forecast/prediction constants.
use serde::Deserialize;

/// EWMA smoothing parameters for the chart trend line.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Smoothing {
    /// Smoothing constant λ in (0.0, 1.0]. The default 0.1 is the classic
    /// Hacker's Diet weight-trend constant and must not drift.
    pub lambda: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self { lambda: 0.1 }
    }
}

/// Holt (double exponential) forecaster parameters.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Forecast {
    /// Level smoothing constant α in (0.0, 1.0].
    pub alpha: f64,
    /// Trend smoothing constant β in (0.0, 1.0].
    pub beta: f64,
}

impl Default for Forecast {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
        }
    }
}

/// Goal-date prediction thresholds.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Prediction {
    /// Current weight within this many display units of the goal counts as "at goal".
    pub goal_tolerance: f64,
    /// Minimum distinct calendar days logged before a date is predicted.
    pub min_distinct_days: usize,
    /// Predictions farther out than this many days are reported as too slow.
    pub max_horizon_days: f64,
    /// Minimum span between first and last sample (hours) for a stable regression.
    pub min_span_hours: f64,
}

impl Default for Prediction {
    fn default() -> Self {
        Self {
            goal_tolerance: 0.5,
            min_distinct_days: 7,
            max_horizon_days: 730.0,
            min_span_hours: 1.0,
        }
    }
}

/// Display/query unit selection.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pounds,
    Kilograms,
}

/// Milestone spacing preference. Maps to 5/10/15 lb or 2/5/7 kg in the core.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Five,
    Ten,
    Fifteen,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct Milestones {
    pub interval: Interval,
}

/// Optional goal block. Absent when the user has not set a target yet.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Goal {
    pub start_weight: f64,
    pub goal_weight: f64,
    #[serde(default)]
    pub unit: Unit,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub smoothing: Smoothing,
    pub forecast: Forecast,
    pub prediction: Prediction,
    pub milestones: Milestones,
    pub goal: Option<Goal>,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse, and validate a config file.
pub fn load_path(path: &std::path::Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))?;
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Smoothing
        if !(self.smoothing.lambda > 0.0 && self.smoothing.lambda <= 1.0) {
            eyre::bail!("smoothing.lambda must be in (0.0, 1.0]");
        }

        // Forecast
        if !(self.forecast.alpha > 0.0 && self.forecast.alpha <= 1.0) {
            eyre::bail!("forecast.alpha must be in (0.0, 1.0]");
        }
        if !(self.forecast.beta > 0.0 && self.forecast.beta <= 1.0) {
            eyre::bail!("forecast.beta must be in (0.0, 1.0]");
        }

        // Prediction
        if !self.prediction.goal_tolerance.is_finite() || self.prediction.goal_tolerance < 0.0 {
            eyre::bail!("prediction.goal_tolerance must be >= 0.0");
        }
        if self.prediction.min_distinct_days < 2 {
            eyre::bail!("prediction.min_distinct_days must be >= 2");
        }
        if !self.prediction.max_horizon_days.is_finite() || self.prediction.max_horizon_days <= 0.0
        {
            eyre::bail!("prediction.max_horizon_days must be > 0");
        }
        if !self.prediction.min_span_hours.is_finite() || self.prediction.min_span_hours < 0.0 {
            eyre::bail!("prediction.min_span_hours must be >= 0");
        }

        // Goal
        if let Some(goal) = &self.goal {
            if !goal.start_weight.is_finite() || goal.start_weight <= 0.0 {
                eyre::bail!("goal.start_weight must be a positive finite weight");
            }
            if !goal.goal_weight.is_finite() || goal.goal_weight <= 0.0 {
                eyre::bail!("goal.goal_weight must be a positive finite weight");
            }
        }

        Ok(())
    }
}

#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Weight trend and milestone analytics (presentation-agnostic).
//!
//! This crate is the pure computational core of a weight-tracking app. It
//! consumes ordered (or unordered; everything sorts defensively) collections
//! of weight samples plus unit/interval preferences, and returns values. It
//! persists nothing, schedules nothing, and renders nothing — those concerns
//! sit behind the interfaces in `store`.
//!
//! ## Architecture
//!
//! - **Units**: pound/kilogram conversion with fixed directional factors
//!   (`units` module)
//! - **Configuration**: runtime config structs (`config` module), bridged
//!   from `trend_config` TOML types in `conversions`
//! - **Smoothing**: EWMA trend line, per-sample and per-day (`smoothing`)
//! - **Forecasting**: Holt level + trend with linear extrapolation (`forecast`)
//! - **Prediction**: OLS goal-date prediction state machine (`prediction`)
//! - **Milestones**: generation, progress bracketing, crossing detection
//!   (`milestones`) and the celebration policy (`celebration`)
//!
//! All weights are normalized to canonical pounds internally; results carry
//! unit-aware accessors or an explicit unit field.

pub mod celebration;
pub mod config;
pub mod conversions;
pub mod error;
pub mod forecast;
pub mod milestones;
pub mod mocks;
pub mod prediction;
pub mod smoothing;
pub mod store;
pub mod types;
pub mod units;

pub use celebration::{CelebrationCheck, CelebrationReason, check_for_celebration};
pub use config::{ForecastCfg, PredictionCfg, SmoothingCfg};
pub use error::TrendError;
pub use forecast::{HoltForecaster, HoltResult};
pub use milestones::{
    MilestoneProgress, detect_crossed_milestones, generate_milestones, milestone_progress,
};
pub use prediction::{GoalPrediction, GoalStatus, predict_goal};
pub use smoothing::EwmaSmoother;
pub use types::{CompletedMilestoneRecord, TrendPoint, WeightSample};
pub use units::{MilestoneInterval, WeightUnit};

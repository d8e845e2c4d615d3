//! Goal-date prediction via ordinary least-squares regression.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::PredictionCfg;
use crate::types::WeightSample;
use crate::units::WeightUnit;

/// Outcome classification for a goal prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    /// The regression predicts reaching the goal on this date.
    OnTrack(NaiveDate),
    /// Current weight is already within tolerance of the goal.
    AtGoal,
    /// The fitted slope points away from the goal.
    WrongDirection,
    /// At the fitted slope, the goal is further out than the horizon.
    TooSlow,
    /// Not enough data for a stable prediction.
    InsufficientData,
    /// No samples at all.
    NoData,
}

/// Result of a goal prediction. A pure function of the sample set, goal, and
/// unit; there is no hidden state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalPrediction {
    pub predicted_date: Option<NaiveDate>,
    /// Fitted slope × 7, in display units per week.
    pub weekly_velocity: f64,
    pub status: GoalStatus,
    /// `|current − goal|` in display units.
    pub weight_to_goal: f64,
    pub unit: WeightUnit,
}

impl GoalPrediction {
    fn empty(status: GoalStatus, weight_to_goal: f64, unit: WeightUnit) -> Self {
        Self {
            predicted_date: None,
            weekly_velocity: 0.0,
            status,
            weight_to_goal,
            unit,
        }
    }
}

const SECS_PER_DAY: f64 = 86_400.0;

/// Predicts when `goal_weight` (in `unit`) will be reached.
///
/// Regresses weight against elapsed days since the first sample and solves
/// `slope·x + intercept = goal_weight`. All weights are converted to the
/// display unit before the fit. Degenerate inputs never error; absence and
/// insufficiency are expressed through [`GoalStatus`].
pub fn predict_goal(
    samples: &[WeightSample],
    goal_weight: f64,
    unit: WeightUnit,
    cfg: &PredictionCfg,
) -> GoalPrediction {
    if samples.is_empty() {
        return GoalPrediction::empty(GoalStatus::NoData, 0.0, unit);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.timestamp);

    let last = sorted[sorted.len() - 1];
    let current = last.weight_in(unit);
    let weight_to_goal = (current - goal_weight).abs();

    if sorted.len() < 2 {
        return GoalPrediction::empty(GoalStatus::InsufficientData, weight_to_goal, unit);
    }

    // Same-instant duplicate entries make the regression unstable; require a
    // minimum span between the first and last sample.
    let first_ts = sorted[0].timestamp;
    let span_hours = (last.timestamp - first_ts).num_seconds() as f64 / 3_600.0;
    if span_hours < cfg.min_span_hours {
        return GoalPrediction::empty(GoalStatus::InsufficientData, weight_to_goal, unit);
    }

    // OLS over (elapsed days, weight in display unit), normal equations form.
    let n = sorted.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for s in &sorted {
        let x = (s.timestamp - first_ts).num_seconds() as f64 / SECS_PER_DAY;
        let y = s.weight_in(unit);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let denom = n * sum_xx - sum_x * sum_x;
    if !denom.is_finite() || denom == 0.0 {
        return GoalPrediction::empty(GoalStatus::InsufficientData, weight_to_goal, unit);
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    let weekly_velocity = slope * 7.0;

    let done = |status| GoalPrediction {
        predicted_date: None,
        weekly_velocity,
        status,
        weight_to_goal,
        unit,
    };

    if weight_to_goal <= cfg.goal_tolerance {
        return done(GoalStatus::AtGoal);
    }

    // Direction the weight must move to reach the goal from here.
    let required = goal_weight - current;
    if slope == 0.0 || slope.signum() != required.signum() {
        tracing::debug!(
            slope_per_day = slope,
            required,
            "goal prediction: slope opposes goal direction"
        );
        return done(GoalStatus::WrongDirection);
    }

    let x_goal = (goal_weight - intercept) / slope;
    let x_last = (last.timestamp - first_ts).num_seconds() as f64 / SECS_PER_DAY;
    let days_ahead = x_goal - x_last;
    if days_ahead > cfg.max_horizon_days {
        tracing::debug!(days_ahead, "goal prediction: beyond horizon");
        return done(GoalStatus::TooSlow);
    }

    let distinct_days: BTreeSet<NaiveDate> =
        sorted.iter().map(|s| s.timestamp.date_naive()).collect();
    if distinct_days.len() < cfg.min_distinct_days {
        return done(GoalStatus::InsufficientData);
    }

    let goal_secs = (x_goal * SECS_PER_DAY).round();
    if !goal_secs.is_finite() {
        return done(GoalStatus::InsufficientData);
    }
    let Some(delta) = chrono::Duration::try_seconds(goal_secs as i64) else {
        return done(GoalStatus::InsufficientData);
    };
    let date = (first_ts + delta).date_naive();
    tracing::trace!(
        slope_per_day = slope,
        days_ahead,
        predicted = %date,
        "goal prediction solved"
    );
    GoalPrediction {
        predicted_date: Some(date),
        weekly_velocity,
        status: GoalStatus::OnTrack(date),
        weight_to_goal,
        unit,
    }
}

use chrono::{Duration, TimeZone, Utc};
use trend_core::{GoalStatus, PredictionCfg, WeightSample, WeightUnit, predict_goal};

fn base() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap()
}

fn lb(day: i64, w: f64) -> WeightSample {
    WeightSample::new(base() + Duration::days(day), w, WeightUnit::Pounds)
}

/// Linear daily series: `start + slope * day` for `days` days.
fn linear(start: f64, slope: f64, days: i64) -> Vec<WeightSample> {
    (0..days).map(|d| lb(d, start + slope * d as f64)).collect()
}

#[test]
fn empty_history_is_no_data() {
    let p = predict_goal(&[], 160.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::NoData);
    assert_eq!(p.predicted_date, None);
    assert_eq!(p.weekly_velocity, 0.0);
}

#[test]
fn single_sample_is_insufficient() {
    let p = predict_goal(
        &[lb(0, 200.0)],
        160.0,
        WeightUnit::Pounds,
        &PredictionCfg::default(),
    );
    assert_eq!(p.status, GoalStatus::InsufficientData);
    assert_eq!(p.weight_to_goal, 40.0);
}

#[test]
fn sub_hour_span_is_insufficient() {
    // Two entries ten minutes apart: a same-session duplicate, not a trend.
    let a = WeightSample::new(base(), 200.0, WeightUnit::Pounds);
    let b = WeightSample::new(base() + Duration::minutes(10), 199.0, WeightUnit::Pounds);
    let p = predict_goal(&[a, b], 160.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::InsufficientData);
}

#[test]
fn within_tolerance_is_at_goal() {
    let samples = linear(160.4, -0.01, 10);
    let p = predict_goal(&samples, 160.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::AtGoal);
    assert_eq!(p.predicted_date, None);
}

#[test]
fn gaining_against_a_loss_goal_is_wrong_direction() {
    let samples = linear(200.0, 0.25, 10);
    let p = predict_goal(&samples, 180.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::WrongDirection);
    assert!(p.weekly_velocity > 0.0);
}

#[test]
fn losing_against_a_gain_goal_is_wrong_direction() {
    let samples = linear(120.0, -0.25, 10);
    let p = predict_goal(&samples, 150.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::WrongDirection);
}

#[test]
fn glacial_slope_is_too_slow() {
    // -0.01 lb/day toward a goal 20 lb away: ~2000 days, beyond the horizon.
    // Checked before the distinct-day minimum, so five days of data suffice.
    let samples = linear(200.0, -0.01, 5);
    let p = predict_goal(&samples, 180.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::TooSlow);
}

#[test]
fn too_few_distinct_days_is_insufficient() {
    let samples = linear(200.0, -0.5, 5);
    let p = predict_goal(&samples, 190.0, WeightUnit::Pounds, &PredictionCfg::default());
    assert_eq!(p.status, GoalStatus::InsufficientData);
}

#[test]
fn steady_loss_predicts_the_crossing_date() {
    // 200 lb falling 0.5/day: hits 190 at day 20 from the first sample.
    let samples = linear(200.0, -0.5, 14);
    let p = predict_goal(&samples, 190.0, WeightUnit::Pounds, &PredictionCfg::default());

    let expected = (base() + Duration::days(20)).date_naive();
    assert_eq!(p.status, GoalStatus::OnTrack(expected));
    assert_eq!(p.predicted_date, Some(expected));
    assert!((p.weekly_velocity - (-3.5)).abs() < 1e-6);
    assert!((p.weight_to_goal - 3.5).abs() < 1e-6);
}

#[test]
fn prediction_in_kilograms_converts_first() {
    // Same series, queried in kilograms against a kg goal.
    let samples = linear(200.0, -0.5, 14);
    let goal_kg = 190.0 * 0.453592;
    let p = predict_goal(&samples, goal_kg, WeightUnit::Kilograms, &PredictionCfg::default());
    let expected = (base() + Duration::days(20)).date_naive();
    assert_eq!(p.status, GoalStatus::OnTrack(expected));
    assert_eq!(p.unit, WeightUnit::Kilograms);
}

#[test]
fn unsorted_input_is_sorted_defensively() {
    let mut samples = linear(200.0, -0.5, 14);
    samples.swap(0, 13);
    samples.swap(3, 9);
    let p = predict_goal(&samples, 190.0, WeightUnit::Pounds, &PredictionCfg::default());
    let expected = (base() + Duration::days(20)).date_naive();
    assert_eq!(p.status, GoalStatus::OnTrack(expected));
}

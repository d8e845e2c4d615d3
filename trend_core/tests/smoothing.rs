use chrono::{Duration, TimeZone, Utc};
use trend_core::{EwmaSmoother, WeightSample, WeightUnit};

fn at(day: i64, hour: u32, w: f64, unit: WeightUnit) -> WeightSample {
    let t = Utc.with_ymd_and_hms(2026, 2, 1, hour, 0, 0).unwrap() + Duration::days(day);
    WeightSample::new(t, w, unit)
}

fn lb(day: i64, w: f64) -> WeightSample {
    at(day, 8, w, WeightUnit::Pounds)
}

#[test]
fn one_point_per_sample_in_timestamp_order() {
    let smoother = EwmaSmoother::default();
    // Deliberately unsorted; the smoother must sort defensively.
    let samples = vec![lb(2, 179.0), lb(0, 180.0), lb(1, 182.0)];
    let points = smoother.smooth(&samples);

    assert_eq!(points.len(), 3);
    let raws: Vec<f64> = points.iter().map(|p| p.raw_weight).collect();
    assert_eq!(raws, vec![180.0, 182.0, 179.0]);
    let smoothed: Vec<f64> = points.iter().map(|p| p.smoothed_weight).collect();
    for (got, want) in smoothed.iter().zip([180.0, 180.2, 180.08].iter()) {
        assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
    }
    assert!(points.iter().all(|p| p.trend_rate.is_none()));
}

#[test]
fn empty_input_yields_empty_output() {
    let smoother = EwmaSmoother::default();
    assert!(smoother.smooth(&[]).is_empty());
    assert!(smoother.smooth_daily(&[]).is_empty());
}

#[test]
fn kilogram_samples_are_normalized_before_smoothing() {
    let smoother = EwmaSmoother::new(1.0).unwrap();
    let kg = 100.0 * 0.453592; // the same mass as 100 lb, tagged in kg
    let points = smoother.smooth(&[lb(0, 100.0), at(1, 8, kg, WeightUnit::Kilograms)]);
    // Round-trip drift from the non-reciprocal factors stays well under 0.01 lb.
    assert!((points[1].raw_weight - 100.0).abs() < 0.01);
}

#[test]
fn daily_variant_averages_same_day_samples() {
    let smoother = EwmaSmoother::new(0.1).unwrap();
    // Two samples on day 0, one on day 1.
    let samples = vec![
        at(0, 7, 184.0, WeightUnit::Pounds),
        at(0, 21, 186.0, WeightUnit::Pounds),
        at(1, 8, 183.0, WeightUnit::Pounds),
    ];
    let points = smoother.smooth_daily(&samples);

    assert_eq!(points.len(), 2, "one point per calendar day");
    assert_eq!(points[0].raw_weight, 185.0, "day 0 bucket averaged");
    assert_eq!(points[0].smoothed_weight, 185.0);
    let expected_day1 = 0.1 * 183.0 + 0.9 * 185.0;
    assert!((points[1].smoothed_weight - expected_day1).abs() < 1e-9);
}

#[test]
fn daily_and_per_sample_variants_differ_on_multi_entry_days() {
    let smoother = EwmaSmoother::default();
    let samples = vec![
        at(0, 7, 184.0, WeightUnit::Pounds),
        at(0, 21, 186.0, WeightUnit::Pounds),
    ];
    assert_eq!(smoother.smooth(&samples).len(), 2);
    assert_eq!(smoother.smooth_daily(&samples).len(), 1);
}

#[test]
fn accessors_convert_on_read() {
    let smoother = EwmaSmoother::default();
    let points = smoother.smooth(&[lb(0, 100.0)]);
    assert_eq!(points[0].smoothed_weight_in(WeightUnit::Kilograms), 45.3592);
    assert_eq!(points[0].raw_weight_in(WeightUnit::Pounds), 100.0);
}

use chrono::{Duration, TimeZone, Utc};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use trend_core::{EwmaSmoother, HoltForecaster, WeightSample, WeightUnit};

// Generate a synthetic history: slow linear loss with additive white noise
fn synth_history(n: usize, noise_amp: f64, seed: u32) -> Vec<WeightSample> {
    // tiny PRNG
    let mut state = seed.max(1);
    let mut next_f64 = || {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        f64::from(x) / (f64::from(u32::MAX) + 1.0)
    };
    let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 8, 0, 0).unwrap();
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let base = 210.0 - 0.02 * i as f64;
        let noise = (next_f64() * 2.0 - 1.0) * noise_amp;
        v.push(WeightSample::new(
            epoch + Duration::days(i as i64),
            base + noise,
            WeightUnit::Pounds,
        ));
    }
    v
}

pub fn bench_trend(c: &mut Criterion) {
    let mut g = c.benchmark_group("trend");
    if let Ok(ss) = std::env::var("BENCH_SAMPLE_SIZE") {
        if let Ok(n) = ss.parse::<usize>() {
            g.sample_size(n.max(1));
        }
    } else {
        g.sample_size(50);
    }

    // Multi-year daily history
    let history = synth_history(1500, 1.5, 0xC0FFEE);

    for &lambda in &[0.1f64, 0.3, 1.0] {
        let smoother = EwmaSmoother::new(lambda).expect("valid lambda");
        g.bench_function(format!("ewma_lambda_{lambda}"), |b| {
            b.iter_batched(
                || history.clone(),
                |h| {
                    let points = smoother.smooth(black_box(&h));
                    black_box(points);
                },
                BatchSize::SmallInput,
            )
        });
    }

    let forecaster = HoltForecaster::default();
    g.bench_function("holt_fit", |b| {
        b.iter_batched(
            || history.clone(),
            |h| {
                let r = forecaster.fit(black_box(&h));
                black_box(r);
            },
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

criterion_group!(trend, bench_trend);
criterion_main!(trend);

//! Benchmarks for the zero-phase one-pole lowpass.

use std::hint::black_box;

use classic_synth::dsp::filter::OnePoleLowpass;
use classic_synth::dsp::time;
use criterion::{BenchmarkId, Criterion};

use crate::{DURATIONS, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let filter = OnePoleLowpass::butterworth(1_000.0 / (SAMPLE_RATE as f64 / 2.0));

    for &duration in DURATIONS {
        let len = time::sample_count(SAMPLE_RATE, duration);
        let input: Vec<f64> = (0..len).map(|i| (i as f64 * 0.05).sin()).collect();

        group.bench_with_input(BenchmarkId::new("filtfilt", len), &len, |b, _| {
            b.iter(|| filter.filtfilt(black_box(&input)))
        });

        // Single pass, for comparison with the forward-backward cost
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("run", len), &len, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.run(black_box(&mut buffer), black_box(0.0));
            })
        });
    }

    group.finish();
}

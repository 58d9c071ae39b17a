//! Benchmarks for the averaging delay line.

use std::hint::black_box;

use classic_synth::dsp::delay::DelayLine;
use criterion::{BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::SAMPLE_RATE;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");
    let samples = SAMPLE_RATE as usize;

    // Line lengths for a high, middle and low string at 44.1 kHz
    let lengths: &[usize] = &[
        50,  // ~880 Hz
        100, // ~440 Hz
        535, // ~82 Hz, low E
    ];

    for &len in lengths {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let pluck = DelayLine::excite(len, &mut rng);

        group.bench_with_input(BenchmarkId::new("next_averaged_1s", len), &len, |b, _| {
            b.iter(|| {
                let mut line = pluck.clone();
                let mut sum = 0.0f32;
                for _ in 0..samples {
                    sum += line.next_averaged();
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

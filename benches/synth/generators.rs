//! Benchmarks for the time-driven generators.
//!
//! Every generator here is built once outside the timed loop; only
//! `generate` is measured.

use std::hint::black_box;

use classic_synth::{
    AdditiveGenerator, AdditiveParams, FmGenerator, FmParams, Generator, KarplusStrongGenerator,
    KarplusStrongParams, SubtractiveGenerator, SubtractiveParams, WavetableGenerator,
    WavetableParams,
};
use criterion::{BenchmarkId, Criterion};

use crate::{DURATIONS, SAMPLE_RATE};

fn generators(duration: f64) -> Vec<Box<dyn Generator>> {
    let additive = AdditiveParams::new(vec![440.0, 880.0, 1320.0], vec![0.5, 0.3, 0.2])
        .with_duration(duration)
        .with_sample_rate(SAMPLE_RATE);
    let subtractive = SubtractiveParams::new(440.0, 500.0)
        .with_duration(duration)
        .with_sample_rate(SAMPLE_RATE);
    let fm = FmParams::new(440.0, 2.0, 5.0)
        .with_duration(duration)
        .with_sample_rate(SAMPLE_RATE);
    let wavetable = WavetableParams {
        frequency: 440.0,
        ..WavetableParams::default()
    }
    .with_duration(duration)
    .with_sample_rate(SAMPLE_RATE);
    let karplus = KarplusStrongParams::new(440.0)
        .with_duration(duration)
        .with_sample_rate(SAMPLE_RATE)
        .with_seed(0);

    // Parameters above are all valid; a failure here is a bench bug.
    vec![
        Box::new(AdditiveGenerator::new(additive).unwrap()),
        Box::new(SubtractiveGenerator::new(subtractive).unwrap()),
        Box::new(FmGenerator::new(fm).unwrap()),
        Box::new(WavetableGenerator::new(wavetable).unwrap()),
        Box::new(KarplusStrongGenerator::new(karplus).unwrap()),
    ]
}

pub fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/render");

    for &duration in DURATIONS {
        for generator in generators(duration) {
            group.bench_with_input(
                BenchmarkId::new(generator.name(), format!("{duration}s")),
                &duration,
                |b, _| b.iter(|| black_box(generator.generate())),
            );
        }
    }

    group.finish();
}

//! Benchmarks for granular resynthesis.
//!
//! The cost is dominated by copying, so overlap (grain count) matters more
//! than grain size.

use std::hint::black_box;

use classic_synth::{Generator, GranularGenerator, GranularParams};
use criterion::{BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::SAMPLE_RATE;

pub fn bench_granular(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/granular");

    let mut rng = StdRng::seed_from_u64(1);
    let source: Vec<f32> = (0..SAMPLE_RATE as usize).map(|_| rng.gen::<f32>()).collect();

    for &overlap in &[0.0f64, 0.5, 0.9] {
        let params = GranularParams::new(source.clone(), 500, overlap).with_sample_rate(SAMPLE_RATE);
        let generator = GranularGenerator::new(params).unwrap();

        group.bench_with_input(
            BenchmarkId::new("grain_500", format!("overlap_{overlap}")),
            &overlap,
            |b, _| b.iter(|| black_box(generator.generate())),
        );
    }

    group.finish();
}

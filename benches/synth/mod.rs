//! Whole-buffer renders, one per synthesis technique.

mod generators;
mod granular;

pub use generators::bench_generators;
pub use granular::bench_granular;

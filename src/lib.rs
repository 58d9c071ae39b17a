pub mod buffer;
pub mod dsp;
pub mod error;
pub mod io; // Sample sinks and PCM conversion
pub mod synth; // One generator per synthesis technique

pub use buffer::SampleBuffer;
pub use error::SynthError;
pub use io::pcm::PCM16_SCALE;
pub use synth::{
    AdditiveGenerator, AdditiveParams, FmGenerator, FmParams, Generator, GranularGenerator,
    GranularParams, KarplusStrongGenerator, KarplusStrongParams, PhaseLaw, SubtractiveGenerator,
    SubtractiveParams, WavetableGenerator, WavetableParams,
};

pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub const DEFAULT_DURATION: f64 = 1.0;
pub const DEFAULT_CUTOFF: f32 = 1_000.0;

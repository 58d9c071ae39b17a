//! Synthesis techniques.
//!
//! Every technique follows the same two-step shape: a plain parameter record
//! is validated into a generator, and the generator renders a complete
//! [`SampleBuffer`] on demand. All validation happens in the constructor, so
//! `generate` cannot fail.
//!
//! Generators are independent of one another. The only composition point is
//! granular synthesis, which takes any buffer (including the output of
//! another generator) as its source.

use crate::buffer::SampleBuffer;

/// Sum of weighted sinusoids.
pub mod additive;
/// Sinusoidal phase modulation.
pub mod fm;
/// Overlapping grains cut from a source signal.
pub mod granular;
/// Plucked string via delay-line feedback.
pub mod karplus;
/// Sawtooth through a zero-phase low-pass.
pub mod subtractive;
/// Nearest-sample lookup into a single-cycle table.
pub mod wavetable;

pub use additive::{AdditiveGenerator, AdditiveParams};
pub use fm::{FmGenerator, FmParams};
pub use granular::{GranularGenerator, GranularParams};
pub use karplus::{KarplusStrongGenerator, KarplusStrongParams};
pub use subtractive::{SubtractiveGenerator, SubtractiveParams};
pub use wavetable::{PhaseLaw, WavetableGenerator, WavetableParams};

/// Core trait shared by all synthesis generators.
///
/// Generators are immutable once built; rendering twice gives the same
/// buffer (Karplus-Strong needs a fixed seed for that).
pub trait Generator: Send + Sync {
    /// Short lowercase name of the technique, used in logs and file names.
    fn name(&self) -> &'static str;

    fn sample_rate(&self) -> f32;

    /// Render the whole buffer.
    fn generate(&self) -> SampleBuffer;
}

/// Allow boxed generators to be used as generators (for dynamic dispatch)
impl Generator for Box<dyn Generator> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn sample_rate(&self) -> f32 {
        (**self).sample_rate()
    }

    fn generate(&self) -> SampleBuffer {
        (**self).generate()
    }
}

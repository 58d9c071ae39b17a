use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::dsp::delay::DelayLine;
use crate::dsp::time;
use crate::error::{self, Result, SynthError};
use crate::synth::Generator;
use crate::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};

/*
Karplus-Strong Plucked String
=============================

A burst of noise circulating in a short delay line, gently low-passed on
every trip around the loop:

    ┌──────────── delay line (D samples) ◄──────────┐
    │                                               │
    └──► out ──► average(current, next) ────────────┘

State machine
-------------

  State        The delay line, D = round(sample_rate / frequency) slots,
               filled with uniform noise in [-1, 1) at the start of each
               render (the "pluck").

  Transition   For i = 0, 1, ..., n - 1, strictly in order:

                 1. out[i]         = line[i mod D]
                 2. line[i mod D]  = 0.5 * (line[i mod D] + line[(i+1) mod D])

               Step 2 at slot D-1 reads slot 0, which was already updated
               earlier in the same lap, so no two iterations may be
               reordered. This loop cannot be vectorized across samples.

  Terminal     None. The line still holds energy when the buffer ends; the
               string simply stops being listened to.

The averaging never increases the largest magnitude in the line, so the
output is bounded by the initial noise and decays as the high partials are
averaged away, low partials last.

Unrolled, the loop is

    out[n] = 0.5 * (out[n - D] + out[n - D + 1])

so the period is D - 0.5 samples, not D: at 44.1 kHz a 440 Hz request
gives D = 100 and sounds at 44100 / 99.5 = 443.2 Hz.

Randomness
----------

The excitation comes from an explicit RNG. `generate_with` takes any
`rand::Rng`; `generate` seeds a `StdRng` from the configured seed, or from
OS entropy when there is none.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct KarplusStrongParams {
    /// String pitch in Hz.
    pub frequency: f32,
    pub duration: f64,
    pub sample_rate: f32,
    /// Seed for the pluck noise. `None` draws a fresh pluck each render.
    pub seed: Option<u64>,
}

impl KarplusStrongParams {
    pub fn new(frequency: f32) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for KarplusStrongParams {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KarplusStrongGenerator {
    params: KarplusStrongParams,
    delay_len: usize,
    len: usize,
}

impl KarplusStrongGenerator {
    pub fn new(params: KarplusStrongParams) -> Result<Self> {
        error::require_timing(params.sample_rate, params.duration)?;
        error::require_positive("frequency", params.frequency)?;

        let period = params.sample_rate as f64 / params.frequency as f64;
        error::require_sample_count("frequency", period)?;
        let delay_len = period.round() as usize;
        if delay_len == 0 {
            return Err(SynthError::DelayLineTooShort {
                sample_rate: params.sample_rate,
                frequency: params.frequency,
            });
        }
        let len = time::sample_count_rounded(params.sample_rate, params.duration);

        tracing::debug!(
            frequency = params.frequency,
            delay_len,
            samples = len,
            seeded = params.seed.is_some(),
            "karplus-strong generator configured"
        );
        Ok(Self {
            params,
            delay_len,
            len,
        })
    }

    pub fn params(&self) -> &KarplusStrongParams {
        &self.params
    }

    /// Delay line length in samples, `round(sample_rate / frequency)`.
    pub fn delay_len(&self) -> usize {
        self.delay_len
    }

    /// Pitch the loop actually rings at, `sample_rate / (delay_len - 0.5)`.
    ///
    /// A one-sample line holds a constant and has no meaningful pitch.
    pub fn effective_frequency(&self) -> f32 {
        self.params.sample_rate / (self.delay_len as f32 - 0.5)
    }

    /// Render with excitation noise drawn from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleBuffer {
        let line = DelayLine::excite(self.delay_len, rng);
        self.ring(line)
    }

    /// Run the feedback loop from an explicit initial line state.
    ///
    /// The line must hold exactly `delay_len()` samples, since its length
    /// is the pitch. It is consumed; its final state is discarded with it.
    pub fn pluck(&self, line: DelayLine) -> Result<SampleBuffer> {
        if line.len() != self.delay_len {
            return Err(SynthError::DelayLineLengthMismatch {
                expected: self.delay_len,
                actual: line.len(),
            });
        }
        Ok(self.ring(line))
    }

    fn ring(&self, mut line: DelayLine) -> SampleBuffer {
        let samples: Vec<f32> = (0..self.len).map(|_| line.next_averaged()).collect();

        tracing::trace!(
            samples = samples.len(),
            residual_peak = line.peak(),
            "karplus-strong render complete"
        );
        SampleBuffer::new(samples, self.params.sample_rate)
    }
}

impl Generator for KarplusStrongGenerator {
    fn name(&self) -> &'static str {
        "karplus_strong"
    }

    fn sample_rate(&self) -> f32 {
        self.params.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }
}

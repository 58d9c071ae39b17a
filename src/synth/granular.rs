#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::error::{self, Result, SynthError};
use crate::synth::Generator;
use crate::DEFAULT_SAMPLE_RATE;

/*
Granular Synthesis
==================

Chop a source signal into short slices ("grains") and lay them end to end.
Grains are taken at a fixed hop; when the hop is shorter than a grain,
consecutive grains share material and the output is longer than the part
of the source it covers.

    grain_size = 4, overlap = 0.5  ->  step = floor(4 * 0.5) = 2

    source:  0 1 2 3 4 5 6 7 8 9
    grains:  [0 1 2 3]
                 [2 3 4 5]
                     [4 5 6 7]
    out:     0 1 2 3 2 3 4 5 4 5 6 7

A grain starts only while `start < N - grain_size`, so the final slice that
would end exactly at the end of the source is never taken, and a source no
longer than one grain yields nothing at all. No window or crossfade is
applied; seams between grains are hard cuts.

The sample rate is carried through to the output buffer and plays no part
in the arithmetic.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct GranularParams {
    /// Source material.
    pub signal: Vec<f32>,
    /// Grain length in samples.
    pub grain_size: usize,
    /// Fraction of each grain shared with the next, in `[0, 1)`.
    pub overlap: f64,
    pub sample_rate: f32,
}

impl GranularParams {
    pub fn new(signal: Vec<f32>, grain_size: usize, overlap: f64) -> Self {
        Self {
            signal,
            grain_size,
            overlap,
            ..Self::default()
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

impl Default for GranularParams {
    fn default() -> Self {
        Self {
            signal: Vec::new(),
            grain_size: 500,
            overlap: 0.5,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GranularGenerator {
    params: GranularParams,
    step: usize,
}

impl GranularGenerator {
    pub fn new(params: GranularParams) -> Result<Self> {
        error::require_positive("sample_rate", params.sample_rate)?;
        error::require_finite("overlap", params.overlap)?;
        if params.grain_size == 0 {
            return Err(SynthError::NonPositive {
                param: "grain_size",
                value: 0.0,
            });
        }
        if !(0.0..1.0).contains(&params.overlap) {
            return Err(SynthError::OverlapOutOfRange {
                overlap: params.overlap,
            });
        }

        let step = (params.grain_size as f64 * (1.0 - params.overlap)).floor() as usize;
        if step == 0 {
            return Err(SynthError::GrainStepTooSmall {
                grain_size: params.grain_size,
                overlap: params.overlap,
            });
        }

        tracing::debug!(
            source_len = params.signal.len(),
            grain_size = params.grain_size,
            overlap = params.overlap,
            step,
            "granular generator configured"
        );
        Ok(Self { params, step })
    }

    pub fn params(&self) -> &GranularParams {
        &self.params
    }

    /// Hop between grain starts, in samples.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Start index of every grain, in output order.
    pub fn grain_starts(&self) -> impl Iterator<Item = usize> {
        let last_start = self
            .params
            .signal
            .len()
            .saturating_sub(self.params.grain_size);
        (0..last_start).step_by(self.step)
    }

    pub fn grain_count(&self) -> usize {
        self.grain_starts().count()
    }
}

impl Generator for GranularGenerator {
    fn name(&self) -> &'static str {
        "granular"
    }

    fn sample_rate(&self) -> f32 {
        self.params.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let grain_size = self.params.grain_size;
        let grains = self.grain_count();

        let mut samples = Vec::with_capacity(grains * grain_size);
        for start in self.grain_starts() {
            samples.extend_from_slice(&self.params.signal[start..start + grain_size]);
        }

        if grains == 0 {
            tracing::warn!(
                source_len = self.params.signal.len(),
                grain_size,
                "source too short for a single grain, output is empty"
            );
        } else {
            tracing::trace!(grains, samples = samples.len(), "granular render complete");
        }
        SampleBuffer::new(samples, self.params.sample_rate)
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::dsp::filter::OnePoleLowpass;
use crate::dsp::{oscillator::ramp_down, time};
use crate::error::{self, Result, SynthError};
use crate::synth::Generator;
use crate::{DEFAULT_CUTOFF, DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};

/*
Subtractive Synthesis
=====================

Start from a harmonically rich source and carve away what you don't want:

    sawtooth ──► low-pass ──► out

The source is a falling ramp, 0.5 at the start of each period down towards
0.0 just before the next:

    0.5 |\    |\    |\
        | \   | \   | \
        |  \  |  \  |  \
    0.0 |   \ |   \ |   \

It carries every harmonic at 1/n amplitude, plus a DC offset of 0.25 that
the low-pass leaves alone.

The filter is a first-order low-pass run forward and then backward over
the whole buffer (see `dsp/filter.rs`), so the result has no phase shift
relative to the source. That is an offline operation; this voice cannot be
streamed block by block.

A cutoff close to Nyquist leaves the ramp almost untouched; a cutoff close
to zero flattens it into a slowly varying level.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SubtractiveParams {
    /// Sawtooth frequency in Hz.
    pub frequency: f32,
    pub duration: f64,
    pub sample_rate: f32,
    /// Low-pass cutoff in Hz, strictly between 0 and Nyquist.
    pub cutoff: f32,
}

impl SubtractiveParams {
    pub fn new(frequency: f32, cutoff: f32) -> Self {
        Self {
            frequency,
            cutoff,
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
}

impl Default for SubtractiveParams {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubtractiveGenerator {
    params: SubtractiveParams,
    filter: OnePoleLowpass,
}

impl SubtractiveGenerator {
    pub fn new(params: SubtractiveParams) -> Result<Self> {
        error::require_timing(params.sample_rate, params.duration)?;
        error::require_positive("frequency", params.frequency)?;
        error::require_finite("cutoff", params.cutoff)?;

        let nyquist = 0.5 * params.sample_rate;
        if params.cutoff <= 0.0 || params.cutoff >= nyquist {
            return Err(SynthError::CutoffOutOfRange {
                cutoff: params.cutoff,
                nyquist,
            });
        }

        let normalized_cutoff = params.cutoff as f64 / nyquist as f64;
        let filter = OnePoleLowpass::butterworth(normalized_cutoff);

        tracing::debug!(
            frequency = params.frequency,
            cutoff = params.cutoff,
            normalized_cutoff,
            "subtractive generator configured"
        );
        Ok(Self { params, filter })
    }

    pub fn params(&self) -> &SubtractiveParams {
        &self.params
    }

    pub fn filter(&self) -> &OnePoleLowpass {
        &self.filter
    }

    /// The unfiltered source, on the same time axis as `generate`.
    pub fn sawtooth(&self) -> Vec<f64> {
        let frequency = self.params.frequency as f64;
        time::time_axis(self.params.sample_rate, self.params.duration)
            .into_iter()
            .map(|t| ramp_down(t * frequency))
            .collect()
    }
}

impl Generator for SubtractiveGenerator {
    fn name(&self) -> &'static str {
        "subtractive"
    }

    fn sample_rate(&self) -> f32 {
        self.params.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let filtered = self.filter.filtfilt(&self.sawtooth());
        let samples: Vec<f32> = filtered.into_iter().map(|x| x as f32).collect();

        tracing::trace!(samples = samples.len(), "subtractive render complete");
        SampleBuffer::new(samples, self.params.sample_rate)
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::dsp::{oscillator::sine, time};
use crate::error::{self, Result, SynthError};
use crate::synth::Generator;
use crate::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};

/*
Additive Synthesis
==================

Build a tone by summing sine waves ("partials"), each with its own
frequency and amplitude:

    out(t) = sum_k amplitudes[k] * sin(2*pi*frequencies[k]*t)

Harmonic partials (integer multiples of a fundamental) give a pitched
tone; the amplitude of each sets the timbre. A sawtooth is roughly
partials 1, 2, 3, ... at amplitudes 1, 1/2, 1/3, ...

Nothing normalizes the sum, so amplitudes adding up to more than one can
push samples past full scale.

Example:
  // A4 with two octaves of overtones
  let params = AdditiveParams::new(vec![440.0, 880.0, 1320.0], vec![0.5, 0.3, 0.2]);
  let buffer = AdditiveGenerator::new(params)?.generate();
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveParams {
    /// Partial frequencies in Hz.
    pub frequencies: Vec<f32>,
    /// Linear amplitude per partial, same length as `frequencies`.
    pub amplitudes: Vec<f32>,
    pub duration: f64,
    pub sample_rate: f32,
}

impl AdditiveParams {
    pub fn new(frequencies: Vec<f32>, amplitudes: Vec<f32>) -> Self {
        Self {
            frequencies,
            amplitudes,
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

impl Default for AdditiveParams {
    fn default() -> Self {
        Self {
            frequencies: Vec::new(),
            amplitudes: Vec::new(),
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdditiveGenerator {
    params: AdditiveParams,
}

impl AdditiveGenerator {
    pub fn new(params: AdditiveParams) -> Result<Self> {
        error::require_timing(params.sample_rate, params.duration)?;
        if params.frequencies.len() != params.amplitudes.len() {
            return Err(SynthError::PartialCountMismatch {
                frequencies: params.frequencies.len(),
                amplitudes: params.amplitudes.len(),
            });
        }
        for &f in &params.frequencies {
            error::require_finite("frequencies", f)?;
        }
        for &a in &params.amplitudes {
            error::require_finite("amplitudes", a)?;
        }

        tracing::debug!(
            partials = params.frequencies.len(),
            duration = params.duration,
            sample_rate = params.sample_rate,
            "additive generator configured"
        );
        Ok(Self { params })
    }

    pub fn params(&self) -> &AdditiveParams {
        &self.params
    }

    pub fn partials(&self) -> usize {
        self.params.frequencies.len()
    }
}

impl Generator for AdditiveGenerator {
    fn name(&self) -> &'static str {
        "additive"
    }

    fn sample_rate(&self) -> f32 {
        self.params.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let axis = time::time_axis(self.params.sample_rate, self.params.duration);
        let partials: Vec<(f64, f64)> = self
            .params
            .frequencies
            .iter()
            .zip(&self.params.amplitudes)
            .map(|(&f, &a)| (f as f64, a as f64))
            .collect();

        let samples: Vec<f32> = axis
            .iter()
            .map(|&t| {
                partials
                    .iter()
                    .map(|&(frequency, amplitude)| amplitude * sine(frequency, t))
                    .sum::<f64>() as f32
            })
            .collect();

        tracing::trace!(samples = samples.len(), "additive render complete");
        SampleBuffer::new(samples, self.params.sample_rate)
    }
}

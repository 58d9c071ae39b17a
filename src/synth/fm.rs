use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::dsp::time;
use crate::error::{self, Result};
use crate::synth::Generator;
use crate::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};

/*
FM Synthesis
============

One sine (the modulator) wobbles the phase of another (the carrier):

    modulator(t) = index * sin(2*pi*fm*t)
    out(t)       = sin(2*pi*fc*t + modulator(t))

Strictly this is phase modulation, which is what most "FM" synths do.

  carrier_freq      Perceived pitch when the ratio fm/fc is simple.
  modulator_freq    Spacing of the sidebands around the carrier.
  modulation_index  Depth, in radians of peak phase deviation. Zero gives a
                    plain sine; larger values spread energy into more
                    sidebands (roughly index + 1 of them on each side).

With a sub-audio modulator (a few Hz) the result is vibrato rather than a
new timbre.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct FmParams {
    pub carrier_freq: f32,
    pub modulator_freq: f32,
    /// Peak phase deviation in radians.
    pub modulation_index: f32,
    pub duration: f64,
    pub sample_rate: f32,
}

impl FmParams {
    pub fn new(carrier_freq: f32, modulator_freq: f32, modulation_index: f32) -> Self {
        Self {
            carrier_freq,
            modulator_freq,
            modulation_index,
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

impl Default for FmParams {
    fn default() -> Self {
        Self {
            carrier_freq: 440.0,
            modulator_freq: 2.0,
            modulation_index: 5.0,
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FmGenerator {
    params: FmParams,
}

impl FmGenerator {
    pub fn new(params: FmParams) -> Result<Self> {
        error::require_timing(params.sample_rate, params.duration)?;
        error::require_finite("carrier_freq", params.carrier_freq)?;
        error::require_finite("modulator_freq", params.modulator_freq)?;
        error::require_finite("modulation_index", params.modulation_index)?;

        tracing::debug!(
            carrier = params.carrier_freq,
            modulator = params.modulator_freq,
            index = params.modulation_index,
            "fm generator configured"
        );
        Ok(Self { params })
    }

    pub fn params(&self) -> &FmParams {
        &self.params
    }
}

impl Generator for FmGenerator {
    fn name(&self) -> &'static str {
        "fm"
    }

    fn sample_rate(&self) -> f32 {
        self.params.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let carrier = self.params.carrier_freq as f64;
        let modulator = self.params.modulator_freq as f64;
        let index = self.params.modulation_index as f64;

        let samples: Vec<f32> = time::time_axis(self.params.sample_rate, self.params.duration)
            .into_iter()
            .map(|t| {
                let deviation = index * (TAU * modulator * t).sin();
                (TAU * carrier * t + deviation).sin() as f32
            })
            .collect();

        tracing::trace!(samples = samples.len(), "fm render complete");
        SampleBuffer::new(samples, self.params.sample_rate)
    }
}

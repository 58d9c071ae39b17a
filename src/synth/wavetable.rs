#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::dsp::time::{self, frac};
use crate::dsp::wavetable::Wavetable;
use crate::error::{self, Result};
use crate::synth::Generator;
use crate::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};

/*
Wavetable Synthesis
===================

Store one cycle of a waveform and read it back at whatever speed gives the
wanted pitch. Lookups are nearest-sample: every output value is copied
verbatim from the table, never interpolated.

Phase laws
----------

NormalizedIndex (default)
    p_i = frac((i / n) * frequency)

    Phase sweeps the table `frequency` times over the whole buffer,
    whatever its length. The pitch in Hz is therefore
    frequency / duration, not frequency. This is the behaviour existing
    renders were made with, so it stays the default.

SampleRate
    p_i = frac(i * frequency / sample_rate)

    The conventional oscillator: phase advances frequency / sample_rate
    cycles per sample, so the pitch is `frequency` Hz for any duration.

For a one-second buffer the two laws agree.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseLaw {
    #[default]
    NormalizedIndex,
    SampleRate,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct WavetableParams {
    /// One cycle of the waveform. Must not be empty.
    pub wavetable: Vec<f32>,
    pub frequency: f32,
    pub duration: f64,
    pub sample_rate: f32,
    pub phase_law: PhaseLaw,
}

impl WavetableParams {
    pub fn new(wavetable: Vec<f32>, frequency: f32) -> Self {
        Self {
            wavetable,
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

    pub fn with_phase_law(mut self, phase_law: PhaseLaw) -> Self {
        self.phase_law = phase_law;
        self
    }
}

impl Default for WavetableParams {
    fn default() -> Self {
        let table = Wavetable::sine_inclusive(1_000)
            .map(|table| table.as_slice().to_vec())
            .unwrap_or_default();
        Self {
            wavetable: table,
            frequency: 440.0,
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            phase_law: PhaseLaw::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WavetableGenerator {
    table: Wavetable,
    frequency: f32,
    duration: f64,
    sample_rate: f32,
    phase_law: PhaseLaw,
}

impl WavetableGenerator {
    pub fn new(params: WavetableParams) -> Result<Self> {
        error::require_timing(params.sample_rate, params.duration)?;
        error::require_finite("frequency", params.frequency)?;
        let table = Wavetable::new(params.wavetable)?;

        tracing::debug!(
            table_len = table.len(),
            frequency = params.frequency,
            phase_law = ?params.phase_law,
            "wavetable generator configured"
        );
        Ok(Self {
            table,
            frequency: params.frequency,
            duration: params.duration,
            sample_rate: params.sample_rate,
            phase_law: params.phase_law,
        })
    }

    pub fn table(&self) -> &Wavetable {
        &self.table
    }

    pub fn phase_law(&self) -> PhaseLaw {
        self.phase_law
    }

    /// Table phase in `[0, 1)` for output sample `index` of `len`.
    fn phase(&self, index: usize, len: usize) -> f64 {
        let cycles = match self.phase_law {
            PhaseLaw::NormalizedIndex => (index as f64 / len as f64) * self.frequency as f64,
            PhaseLaw::SampleRate => {
                index as f64 * self.frequency as f64 / self.sample_rate as f64
            }
        };
        frac(cycles)
    }
}

impl Generator for WavetableGenerator {
    fn name(&self) -> &'static str {
        "wavetable"
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn generate(&self) -> SampleBuffer {
        let len = time::sample_count(self.sample_rate, self.duration);
        let samples: Vec<f32> = (0..len)
            .map(|i| self.table.lookup(self.phase(i, len)))
            .collect();

        tracing::trace!(samples = samples.len(), "wavetable render complete");
        SampleBuffer::new(samples, self.sample_rate)
    }
}

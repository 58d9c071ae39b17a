use std::f64::consts::TAU;

use crate::dsp::oscillator::Waveform;
use crate::error::{Result, SynthError};

/// One cycle of a periodic waveform, read by nearest-sample lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavetable {
    samples: Box<[f32]>,
}

impl Wavetable {
    pub fn new(samples: Vec<f32>) -> Result<Self> {
        if samples.is_empty() {
            return Err(SynthError::EmptyWavetable);
        }
        Ok(Self {
            samples: samples.into_boxed_slice(),
        })
    }

    /// `len` evenly spaced points of one cycle of `waveform`, last point
    /// excluded so the table wraps seamlessly.
    pub fn from_waveform(waveform: Waveform, len: usize) -> Result<Self> {
        let samples = (0..len)
            .map(|i| waveform.at(i as f64 / len as f64) as f32)
            .collect();
        Self::new(samples)
    }

    /// Sine table sampled on `[0, 1]` with both endpoints included.
    ///
    /// The first and last entries are both zero, which duplicates the zero
    /// crossing when the table wraps. Kept for matching tables built with an
    /// inclusive linspace.
    pub fn sine_inclusive(len: usize) -> Result<Self> {
        let denom = len.saturating_sub(1).max(1) as f64;
        let samples = (0..len)
            .map(|i| (TAU * i as f64 / denom).sin() as f32)
            .collect();
        Self::new(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Nearest-sample lookup at `phase` in `[0, 1)`.
    #[inline]
    pub fn lookup(&self, phase: f64) -> f32 {
        let len = self.samples.len();
        // `phase * len` can round up to `len` when phase is a hair below one.
        let index = ((phase * len as f64) as usize).min(len - 1);
        self.samples[index]
    }
}

impl TryFrom<Vec<f32>> for Wavetable {
    type Error = SynthError;

    fn try_from(samples: Vec<f32>) -> Result<Self> {
        Self::new(samples)
    }
}

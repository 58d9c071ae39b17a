use std::ops::Deref;

/// A finished block of mono audio.
///
/// Samples are nominally in `[-1.0, 1.0]` but nothing clamps them; additive
/// synthesis with large amplitudes will happily exceed that range. The
/// buffer is sized once by the generator that produced it and is read-only
/// from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: f32,
}

impl SampleBuffer {
    pub(crate) fn new(samples: Vec<f32>, sample_rate: f32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.samples
    }

    /// Length of the buffer in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value, `0.0` for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    /// Root-mean-square level, `0.0` for an empty buffer.
    pub fn rms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let energy: f64 = self.samples.iter().map(|&x| (x as f64) * (x as f64)).sum();
        (energy / self.samples.len() as f64).sqrt() as f32
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl AsRef<[f32]> for SampleBuffer {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}

impl From<SampleBuffer> for Vec<f32> {
    fn from(buffer: SampleBuffer) -> Self {
        buffer.samples
    }
}

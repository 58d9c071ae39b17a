//! Configuration errors raised while constructing a generator.
//!
//! Every generator validates its parameters up front, so generation itself
//! never fails. Each variant names the parameter that was rejected.

use thiserror::Error;

use crate::dsp::time::MAX_SAMPLES;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    #[error("`{param}` must be greater than zero, got {value}")]
    NonPositive { param: &'static str, value: f64 },

    #[error("`{param}` must not be negative, got {value}")]
    Negative { param: &'static str, value: f64 },

    #[error("`{param}` must be a finite number")]
    NonFinite { param: &'static str },

    #[error("got {frequencies} frequencies but {amplitudes} amplitudes; every partial needs both")]
    PartialCountMismatch {
        frequencies: usize,
        amplitudes: usize,
    },

    #[error("cutoff {cutoff} Hz must lie strictly between 0 and the Nyquist frequency {nyquist} Hz")]
    CutoffOutOfRange { cutoff: f32, nyquist: f32 },

    #[error("wavetable must contain at least one sample")]
    EmptyWavetable,

    #[error("overlap must lie in [0, 1), got {overlap}")]
    OverlapOutOfRange { overlap: f64 },

    #[error("grain size {grain_size} with overlap {overlap} advances by zero samples per grain")]
    GrainStepTooSmall { grain_size: usize, overlap: f64 },

    #[error("{frequency} Hz at {sample_rate} Hz sample rate gives a delay line shorter than one sample")]
    DelayLineTooShort { sample_rate: f32, frequency: f32 },

    #[error("delay line holds {actual} samples, the generator expects {expected}")]
    DelayLineLengthMismatch { expected: usize, actual: usize },

    #[error("`{param}` asks for {samples} samples, more than the limit of {limit}")]
    TooManySamples {
        param: &'static str,
        samples: f64,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, SynthError>;

pub(crate) fn require_finite(param: &'static str, value: impl Into<f64>) -> Result<()> {
    if value.into().is_finite() {
        Ok(())
    } else {
        Err(SynthError::NonFinite { param })
    }
}

pub(crate) fn require_positive(param: &'static str, value: impl Into<f64>) -> Result<()> {
    let value = value.into();
    require_finite(param, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SynthError::NonPositive { param, value })
    }
}

pub(crate) fn require_non_negative(param: &'static str, value: impl Into<f64>) -> Result<()> {
    let value = value.into();
    require_finite(param, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SynthError::Negative { param, value })
    }
}

/// Rejects a sample count beyond `MAX_SAMPLES` before anything is allocated.
pub(crate) fn require_sample_count(param: &'static str, samples: f64) -> Result<()> {
    if samples <= MAX_SAMPLES as f64 {
        Ok(())
    } else {
        Err(SynthError::TooManySamples {
            param,
            samples,
            limit: MAX_SAMPLES,
        })
    }
}

/// Checks shared by every time-based generator.
pub(crate) fn require_timing(sample_rate: f32, duration: f64) -> Result<()> {
    require_positive("sample_rate", sample_rate)?;
    require_non_negative("duration", duration)?;
    require_sample_count("duration", sample_rate as f64 * duration)
}

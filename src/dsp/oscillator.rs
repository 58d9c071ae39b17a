use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::time::frac;

/*
Periodic Waveforms
==================

Each shape is a function of phase, measured in cycles: phase 0.0 is the
start of a period and 1.0 the start of the next. Working in cycles rather
than radians keeps the wrap a single `frac` call.

  Sine      sin(2*pi*p)                 fundamental only
  Saw       1 - 2p                      all harmonics, 1/n falloff
  Square    +1 for p < 0.5, else -1     odd harmonics, 1/n falloff
  Triangle  1 - 4|p - 0.5| shifted      odd harmonics, 1/n^2 falloff

All shapes are bipolar (-1..1) and start at (or near) zero crossing for
sine/triangle, at the top of the ramp for saw.

The subtractive voice uses its own unipolar falling ramp, see `ramp_down`.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

impl Waveform {
    /// Evaluate the waveform at `phase` cycles. Any finite phase is wrapped.
    pub fn at(self, phase: f64) -> f64 {
        let p = frac(phase);
        match self {
            Waveform::Sine => (TAU * p).sin(),
            Waveform::Saw => 1.0 - 2.0 * p,
            Waveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => {
                // Quarter-cycle shift so the triangle starts at zero rising, like sine.
                let q = frac(p + 0.25);
                1.0 - 4.0 * (q - 0.5).abs()
            }
        }
    }
}

/// `sin(2*pi*frequency*t)`.
#[inline]
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TAU * frequency * t).sin()
}

/// Falling ramp `0.5 * (1 - frac(cycles))`.
///
/// Starts each period at 0.5 and falls linearly towards 0.0, so the signal
/// carries a DC offset of 0.25.
#[inline]
pub fn ramp_down(cycles: f64) -> f64 {
    0.5 * (1.0 - frac(cycles))
}

use std::f64::consts::PI;

/*
First-Order Low-Pass, Applied Zero-Phase
========================================

The subtractive voice shapes its sawtooth with the simplest useful filter:
a one-pole Butterworth low-pass designed with the bilinear transform.

Vocabulary
----------

  normalized cutoff   cutoff / nyquist, strictly inside (0, 1).

  pre-warping         The bilinear transform squashes the analog frequency
                      axis. Designing the analog prototype at
                      K = tan(pi * wn / 2) puts the -3 dB point exactly at
                      the requested digital cutoff.

  zero-phase          Running the filter forward and then backward over the
                      same buffer cancels its phase response. The magnitude
                      response is squared (-6 dB at cutoff) and the output
                      has no group delay. The cost is that the whole buffer
                      must be known up front.


The Design
----------

    b0 = b1 = K / (1 + K)
    a1      = (K - 1) / (K + 1)

    y[n] = b0 * x[n] + b1 * x[n-1] - a1 * y[n-1]

DC gain is (b0 + b1) / (1 + a1) = 1, and there is a zero at Nyquist.


Edge Handling
-------------

Starting a recursive filter from rest on a signal that does not start at
zero produces a step transient. Two things keep the edges quiet:

1. The buffer is extended at each end by an odd reflection of up to
   PAD_LEN samples around the end sample:

       ext_left[k] = 2 * x[0] - x[k]

   which continues the local slope of the signal instead of jumping.

2. Each pass starts with its state at the steady-state value for a
   constant input equal to the first sample of that pass, so a flat
   signal passes through untouched from the very first sample.

The extension is trimmed before the result is returned.
*/

/// Samples of odd reflection added at each end before filtering.
pub const PAD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleLowpass {
    b0: f64,
    b1: f64,
    a1: f64,
}

impl OnePoleLowpass {
    /// Butterworth design at `normalized_cutoff` (cutoff / nyquist).
    ///
    /// The caller is responsible for keeping the cutoff strictly inside
    /// `(0, 1)`; the subtractive generator validates it at construction.
    pub fn butterworth(normalized_cutoff: f64) -> Self {
        debug_assert!(normalized_cutoff > 0.0 && normalized_cutoff < 1.0);
        let k = (PI * normalized_cutoff / 2.0).tan();
        let gain = k / (1.0 + k);
        Self {
            b0: gain,
            b1: gain,
            a1: (k - 1.0) / (k + 1.0),
        }
    }

    /// Numerator and denominator, `([b0, b1], [1, a1])`.
    pub fn coefficients(&self) -> ([f64; 2], [f64; 2]) {
        ([self.b0, self.b1], [1.0, self.a1])
    }

    // State of the transposed direct form after an infinitely long unit input.
    fn steady_state(&self) -> f64 {
        (self.b1 - self.a1 * self.b0) / (1.0 + self.a1)
    }

    /// Filter `buffer` in place, starting from internal state `state`.
    pub fn run(&self, buffer: &mut [f64], mut state: f64) {
        for sample in buffer.iter_mut() {
            let x = *sample;
            let y = self.b0 * x + state;
            state = self.b1 * x - self.a1 * y;
            *sample = y;
        }
    }

    /// Forward-backward application with odd-reflection padding.
    ///
    /// The output has the same length as `input`.
    pub fn filtfilt(&self, input: &[f64]) -> Vec<f64> {
        let len = input.len();
        if len == 0 {
            return Vec::new();
        }

        let pad = PAD_LEN.min(len - 1);
        let first = input[0];
        let last = input[len - 1];

        let mut ext = Vec::with_capacity(len + 2 * pad);
        ext.extend((1..=pad).rev().map(|k| 2.0 * first - input[k]));
        ext.extend_from_slice(input);
        ext.extend((1..=pad).map(|k| 2.0 * last - input[len - 1 - k]));

        let zi = self.steady_state();

        let start = ext[0];
        self.run(&mut ext, zi * start);

        ext.reverse();
        let start = ext[0];
        self.run(&mut ext, zi * start);
        ext.reverse();

        ext.truncate(pad + len);
        ext.drain(..pad);
        ext
    }
}

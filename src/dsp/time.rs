//! Time axis shared by the time-domain generators.

/*
Sample Instants
===============

Every generator that evaluates a function of time samples it on the same
half-open grid:

    n   = floor(sample_rate * duration)
    t_i = i / sample_rate            for i in [0, n)

The endpoint `duration` itself is never sampled, so two buffers rendered
back to back line up without a duplicated sample at the seam.

    duration = 4 / sample_rate

    t:  0    1/sr   2/sr   3/sr  | 4/sr
        *     *      *      *    |  (excluded)

All of this runs in f64. At 44.1 kHz an f32 time value loses sub-sample
resolution after a few minutes, and sin(2*pi*f*t) amplifies that error by
the frequency.
*/

/// Largest buffer any generator will allocate, about 6.8 hours at 44.1 kHz.
pub const MAX_SAMPLES: usize = 1 << 30;

/// Number of samples in `duration` seconds, rounded down.
///
/// # Example
/// ```
/// use classic_synth::dsp::time::sample_count;
/// assert_eq!(sample_count(44_100.0, 1.0 / 440.0), 100);
/// assert_eq!(sample_count(48_000.0, 0.0), 0);
/// ```
#[inline]
pub fn sample_count(sample_rate: f32, duration: f64) -> usize {
    (sample_rate as f64 * duration).floor().max(0.0) as usize
}

/// Number of samples in `duration` seconds, rounded to nearest.
#[inline]
pub fn sample_count_rounded(sample_rate: f32, duration: f64) -> usize {
    (sample_rate as f64 * duration).round().max(0.0) as usize
}

/// Time in seconds of sample `index`.
#[inline]
pub fn instant(index: usize, sample_rate: f32) -> f64 {
    index as f64 / sample_rate as f64
}

/// Evenly spaced sample instants covering `[0, duration)`.
pub fn time_axis(sample_rate: f32, duration: f64) -> Vec<f64> {
    (0..sample_count(sample_rate, duration))
        .map(|i| instant(i, sample_rate))
        .collect()
}

/// Fractional part, always in `[0, 1)` for finite input.
#[inline]
pub fn frac(x: f64) -> f64 {
    x - x.floor()
}

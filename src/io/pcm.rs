/// Full-scale value for 16-bit signed PCM.
pub const PCM16_SCALE: f32 = 32_767.0;

/// Quantize one sample to 16-bit PCM: `round(sample * 32767)`, clipped.
///
/// Out-of-range input saturates instead of wrapping, and NaN maps to zero.
///
/// # Example
/// ```
/// use classic_synth::io::pcm::to_pcm16;
/// assert_eq!(to_pcm16(1.0), 32_767);
/// assert_eq!(to_pcm16(-1.0), -32_767);
/// assert_eq!(to_pcm16(2.5), 32_767);
/// assert_eq!(to_pcm16(-2.5), -32_768);
/// ```
#[inline]
pub fn to_pcm16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample * PCM16_SCALE)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Back to a normalized float, the inverse of `to_pcm16` up to rounding.
#[inline]
pub fn from_pcm16(sample: i16) -> f32 {
    sample as f32 / PCM16_SCALE
}

pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().copied().map(to_pcm16).collect()
}

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::SampleBuffer;
use crate::io::pcm::to_pcm16;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write WAV file {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("sample rate {0} Hz cannot be stored in a WAV header")]
    UnsupportedSampleRate(f32),
}

/// Consumer of finished buffers.
pub trait SampleSink {
    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// Signed 16-bit integer, `round(sample * 32767)` clipped.
    #[default]
    Pcm16,
    /// IEEE float, samples stored unchanged.
    Float32,
}

/// Mono WAV file at the buffer's own sample rate.
///
/// Each `write` replaces the file.
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
    bit_depth: BitDepth,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bit_depth: BitDepth::default(),
        }
    }

    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn spec(&self, sample_rate: f32) -> Result<hound::WavSpec, SinkError> {
        let rate = sample_rate.round();
        if !(1.0..=u32::MAX as f32).contains(&rate) {
            return Err(SinkError::UnsupportedSampleRate(sample_rate));
        }
        let (bits_per_sample, sample_format) = match self.bit_depth {
            BitDepth::Pcm16 => (16, hound::SampleFormat::Int),
            BitDepth::Float32 => (32, hound::SampleFormat::Float),
        };
        Ok(hound::WavSpec {
            channels: 1,
            sample_rate: rate as u32,
            bits_per_sample,
            sample_format,
        })
    }

    fn write_samples(&self, buffer: &SampleBuffer, spec: hound::WavSpec) -> Result<(), hound::Error> {
        let mut writer = hound::WavWriter::create(&self.path, spec)?;
        match self.bit_depth {
            BitDepth::Pcm16 => {
                for &sample in buffer.iter() {
                    writer.write_sample(to_pcm16(sample))?;
                }
            }
            BitDepth::Float32 => {
                for &sample in buffer.iter() {
                    writer.write_sample(sample)?;
                }
            }
        }
        writer.finalize()
    }
}

impl SampleSink for WavSink {
    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), SinkError> {
        let spec = self.spec(buffer.sample_rate())?;
        self.write_samples(buffer, spec).map_err(|source| SinkError::Wav {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.path.display(),
            samples = buffer.len(),
            sample_rate = spec.sample_rate,
            bits = spec.bits_per_sample,
            "wrote wav"
        );
        Ok(())
    }
}

/// Keeps every buffer it is given, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub buffers: Vec<SampleBuffer>,
}

impl SampleSink for MemorySink {
    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), SinkError> {
        self.buffers.push(buffer.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_pcm16_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pcm16.wav");
        let buffer = SampleBuffer::new(vec![0.0, 0.5, -0.5, 1.0, -1.5], 22_050.0);

        WavSink::new(&path).write(&buffer).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22_050);
        assert_eq!(spec.bits_per_sample, 16);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16_384, -16_384, 32_767, -32_768]);
    }

    #[test]
    fn test_float_sink_keeps_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let buffer = SampleBuffer::new(vec![0.25, -0.75], 8_000.0);

        WavSink::new(&path)
            .with_bit_depth(BitDepth::Float32)
            .write(&buffer)
            .unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0.25, -0.75]);
    }

    #[test]
    fn test_bad_directory_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        let err = WavSink::new(&path)
            .write(&SampleBuffer::new(vec![0.0], 44_100.0))
            .unwrap_err();
        assert!(matches!(err, SinkError::Wav { .. }));
        assert!(err.to_string().contains("out.wav"));
    }

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::default();
        sink.write(&SampleBuffer::new(vec![0.1], 100.0)).unwrap();
        sink.write(&SampleBuffer::new(vec![0.2, 0.3], 100.0)).unwrap();
        assert_eq!(sink.buffers.len(), 2);
        assert_eq!(sink.buffers[1].as_slice(), &[0.2, 0.3]);
    }
}

//! Low-level DSP primitives used by the synthesis generators.
//!
//! These pieces know nothing about parameters or validation; they are the
//! signal math the generators in `synth` are assembled from.

/// Fixed-length circular buffer with in-loop averaging.
pub mod delay;
/// First-order low-pass filter and its zero-phase application.
pub mod filter;
/// Periodic waveform shapes evaluated by phase.
pub mod oscillator;
/// Sample counts and the shared time axis.
pub mod time;
/// Single-cycle lookup tables.
pub mod wavetable;

pub use oscillator::Waveform;
pub use wavetable::Wavetable;

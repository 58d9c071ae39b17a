use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "classic-synth", about = "Render classic synthesis techniques to WAV")]
pub struct Cli {
    /// Technique to render
    #[arg(value_enum)]
    pub technique: Technique,

    /// Directory the WAV files are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Length of each render in seconds
    #[arg(short, long, default_value_t = 2.0)]
    pub duration: f64,

    /// Sample rate in Hz
    #[arg(short = 'r', long, default_value_t = classic_synth::DEFAULT_SAMPLE_RATE)]
    pub sample_rate: f32,

    /// Seed for every random source (granular input, pluck noise)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON file with the technique's parameters, replacing the demo values
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Write 32-bit float instead of 16-bit PCM
    #[arg(long)]
    pub float: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Technique {
    Additive,
    Subtractive,
    Fm,
    Wavetable,
    Granular,
    KarplusStrong,
    All,
}

impl Technique {
    pub const EACH: [Technique; 6] = [
        Technique::Additive,
        Technique::Subtractive,
        Technique::Fm,
        Technique::Wavetable,
        Technique::Granular,
        Technique::KarplusStrong,
    ];
}

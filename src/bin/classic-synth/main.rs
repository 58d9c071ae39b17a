//! classic-synth - render the synthesis techniques to WAV files
//!
//! Run with: cargo run -- all --out-dir renders

mod cli;
mod demo;

use clap::Parser;
use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use classic_synth::io::{BitDepth, SampleSink, WavSink};

use cli::{Cli, Technique};

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let techniques: Vec<Technique> = match cli.technique {
        Technique::All => {
            if cli.params.is_some() {
                bail!("--params applies to a single technique, not `all`");
            }
            Technique::EACH.to_vec()
        }
        one => vec![one],
    };

    std::fs::create_dir_all(&cli.out_dir)
        .wrap_err_with(|| format!("failed to create {}", cli.out_dir.display()))?;

    let bit_depth = if cli.float {
        BitDepth::Float32
    } else {
        BitDepth::Pcm16
    };

    for technique in techniques {
        let generator = demo::build(technique, &cli)
            .wrap_err_with(|| format!("invalid parameters for {technique:?}"))?;
        let buffer = generator.generate();

        let path = cli.out_dir.join(format!("{}_synth.wav", generator.name()));
        let mut sink = WavSink::new(&path).with_bit_depth(bit_depth);
        sink.write(&buffer)?;

        println!(
            "{:<15} {:>8} samples  peak {:.3}  rms {:.3}  -> {}",
            generator.name(),
            buffer.len(),
            buffer.peak(),
            buffer.rms(),
            path.display()
        );
    }

    Ok(())
}

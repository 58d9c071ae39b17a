//! Demo parameter choices for each technique.
//!
//! The values reproduce the classic showcase: an A4 chord of partials, a
//! dark filtered saw, slow vibrato FM, a sine wavetable, grains of white
//! noise, and a plucked A.

use std::path::Path;

use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;

use classic_synth::{
    AdditiveGenerator, AdditiveParams, FmGenerator, FmParams, Generator, GranularGenerator,
    GranularParams, KarplusStrongGenerator, KarplusStrongParams, SubtractiveGenerator,
    SubtractiveParams, WavetableGenerator, WavetableParams,
};

use crate::cli::{Cli, Technique};

fn load<P: DeserializeOwned>(path: &Path) -> EyreResult<P> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

/// Explicit parameters from `--params`, or the demo values.
fn params_or<P: DeserializeOwned>(cli: &Cli, demo: impl FnOnce() -> P) -> EyreResult<P> {
    match &cli.params {
        Some(path) => load(path),
        None => Ok(demo()),
    }
}

fn rng(cli: &Cli) -> StdRng {
    match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn build(technique: Technique, cli: &Cli) -> EyreResult<Box<dyn Generator>> {
    let duration = cli.duration;
    let sample_rate = cli.sample_rate;

    let generator: Box<dyn Generator> = match technique {
        Technique::Additive => {
            let params = params_or(cli, || {
                AdditiveParams::new(vec![440.0, 880.0, 1320.0], vec![0.5, 0.3, 0.2])
                    .with_duration(duration)
                    .with_sample_rate(sample_rate)
            })?;
            Box::new(AdditiveGenerator::new(params)?)
        }
        Technique::Subtractive => {
            let params = params_or(cli, || {
                SubtractiveParams::new(440.0, 500.0)
                    .with_duration(duration)
                    .with_sample_rate(sample_rate)
            })?;
            Box::new(SubtractiveGenerator::new(params)?)
        }
        Technique::Fm => {
            let params = params_or(cli, || {
                FmParams::new(440.0, 2.0, 5.0)
                    .with_duration(duration)
                    .with_sample_rate(sample_rate)
            })?;
            Box::new(FmGenerator::new(params)?)
        }
        Technique::Wavetable => {
            let params = params_or(cli, || {
                WavetableParams {
                    frequency: 440.0,
                    ..WavetableParams::default()
                }
                .with_duration(duration)
                .with_sample_rate(sample_rate)
            })?;
            Box::new(WavetableGenerator::new(params)?)
        }
        Technique::Granular => {
            let params = params_or(cli, || {
                // One second of uniform noise in [0, 1) as source material.
                let mut rng = rng(cli);
                let source_len = sample_rate.round() as usize;
                let source: Vec<f32> = (0..source_len).map(|_| rng.gen::<f32>()).collect();
                GranularParams::new(source, 500, 0.5).with_sample_rate(sample_rate)
            })?;
            Box::new(GranularGenerator::new(params)?)
        }
        Technique::KarplusStrong => {
            let params = params_or(cli, || {
                let params = KarplusStrongParams::new(440.0)
                    .with_duration(duration)
                    .with_sample_rate(sample_rate);
                match cli.seed {
                    Some(seed) => params.with_seed(seed),
                    None => params,
                }
            })?;
            Box::new(KarplusStrongGenerator::new(params)?)
        }
        Technique::All => bail!("`all` names every technique, build them one at a time"),
    };

    tracing::debug!(technique = generator.name(), "built demo generator");
    Ok(generator)
}

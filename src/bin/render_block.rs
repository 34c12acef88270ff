// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Single block renderer
// Builds one hourly signal from flags and writes it as a mono WAV file

use anyhow::{Context, Result};
use clap::Parser;
use codex_audio::config::Config;
use codex_audio::render::{render_block, write_wav, WavSampleFormat};
use codex_audio::signal::HourlySignal;
use codex_audio::synthesis::NoiseGenerator;
use log::info;
use std::path::PathBuf;

/// Render one hour of ambient audio to a WAV file
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path (.wav)
    #[arg(short, long, value_name = "FILE", default_value = "demo.wav")]
    out: PathBuf,

    /// Duration in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(short, long)]
    sample_rate: Option<u32>,

    /// Cloud cover (0 clear to 1 overcast)
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    cloud: f64,

    /// Wind speed in m/s
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    wind: f64,

    /// Sun altitude in degrees (-90 to 90)
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    sun: f64,

    /// Moon phase (0 new to 1 full)
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    moon: f64,

    /// Hour of the day, informational only
    #[arg(long, default_value_t = 12)]
    hour: u8,

    /// Seed for the noise bed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write 32-bit float samples instead of 16-bit PCM
    #[arg(long, default_value_t = false)]
    float: bool,

    /// Optional YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_args(
        args.duration,
        args.sample_rate,
        args.seed,
        args.float.then_some(WavSampleFormat::Float32),
    );
    let render_config = config.render_config()?;

    let signal = HourlySignal::new(args.hour, args.cloud, args.wind, args.sun, args.moon);
    info!("Rendering {:?}", signal);

    let mut generator = match config.render.seed {
        Some(seed) => NoiseGenerator::new(seed),
        None => NoiseGenerator::from_os_rng(),
    };

    let block = render_block(&signal, &render_config, &mut generator)
        .context("Failed to render block")?;
    write_wav(&args.out, &block, config.output.sample_format)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!(
        "Wrote {:.1}s block to {}",
        render_config.duration_s(),
        args.out.display()
    );

    Ok(())
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Day composer
// Reads a JSON bundle of hourly readings and writes one continuous WAV file

use anyhow::{Context, Result};
use clap::Parser;
use codex_audio::config::Config;
use codex_audio::render::WavSampleFormat;
use codex_audio::signal::SignalBundle;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Render a day of hourly readings into a single WAV file
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a signal bundle or a bare array of hourly readings
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output file path (.wav)
    #[arg(short, long, value_name = "FILE")]
    out: PathBuf,

    /// Duration of each hourly block in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(short, long)]
    sample_rate: Option<u32>,

    /// Base seed for the noise bed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write 32-bit float samples instead of 16-bit PCM
    #[arg(long, default_value_t = false)]
    float: bool,

    /// Render blocks one after another instead of in parallel
    #[arg(long, default_value_t = false)]
    sequential: bool,

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
    if args.sequential {
        config.output.parallel = false;
    }

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let bundle = SignalBundle::from_json_str(&contents)
        .with_context(|| format!("Failed to parse readings from {}", args.input.display()))?;
    let signals = bundle.signals();
    info!(
        "Loaded {} hourly readings (date: {:?}, lat: {}, lon: {})",
        signals.len(),
        bundle.date,
        bundle.lat,
        bundle.lon
    );

    let day = config
        .composer()?
        .compose_to_file(&signals, &args.out)
        .with_context(|| format!("Failed to compose day into {}", args.out.display()))?;

    println!(
        "Wrote {} hours ({:.1}s) to {}",
        signals.len(),
        day.duration_s(),
        args.out.display()
    );

    Ok(())
}

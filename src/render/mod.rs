// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Block rendering
//!
//! One [`HourlySignal`] and one [`RenderConfig`] produce exactly one
//! [`AudioBlock`]. The stages run in a fixed order:
//!
//! 1. normalize the signal
//! 2. harmonic bed (cloud cover drives loudness)
//! 3. noise bed (wind drives loudness)
//! 4. Butterworth lowpass on the noise bed (wind drives cutoff)
//! 5. mix
//! 6. LFO tremolo (sun drives rate, moon drives depth)
//! 7. soft limiter
//!
//! Blocks are independent of each other; [`compose`] drives repeated renders
//! and owns concatenation and persistence.
//!
//! # Examples
//!
//! ```
//! use codex_audio::render::{render_block, RenderConfig};
//! use codex_audio::signal::HourlySignal;
//! use codex_audio::synthesis::NoiseGenerator;
//!
//! let signal = HourlySignal::new(12, 0.3, 4.0, 25.0, 0.7);
//! let config = RenderConfig::new(2.0, 8000).unwrap();
//! let mut rng = NoiseGenerator::new(42);
//!
//! let block = render_block(&signal, &config, &mut rng).unwrap();
//! assert_eq!(block.len(), 16000);
//! assert!(block.peak() <= 0.99);
//! ```

pub mod block;
pub mod compose;
pub mod config;
pub mod parameters;
pub mod wav;

pub use block::AudioBlock;
pub use compose::{compose_day, DayComposer};
pub use config::{RenderConfig, DEFAULT_DURATION_S, DEFAULT_SAMPLE_RATE};
pub use parameters::BlockParameters;
pub use wav::{write_wav, WavSampleFormat};

use crate::error::Result;
use crate::filter::{shape_noise, CoefficientCache};
use crate::signal::HourlySignal;
use crate::synthesis::{
    apply_lfo, generate_noise, generate_sine_stack, mix, soft_limit, HARMONIC_PARTIALS,
};
use log::debug;
use rand::Rng;

/// Render one block, drawing noise from `rng`
pub fn render_block<R: Rng + ?Sized>(
    signal: &HourlySignal,
    config: &RenderConfig,
    rng: &mut R,
) -> Result<AudioBlock> {
    render_block_with_cache(signal, config, rng, None)
}

/// Render one block, reusing filter coefficients from `cache` when given
pub fn render_block_with_cache<R: Rng + ?Sized>(
    signal: &HourlySignal,
    config: &RenderConfig,
    rng: &mut R,
    cache: Option<&CoefficientCache>,
) -> Result<AudioBlock> {
    let signal = signal.normalized();
    let params = BlockParameters::from_signal(&signal);
    let duration_s = config.duration_s();
    let sample_rate = config.sample_rate();

    debug!(
        "Rendering hour {:02}: {} samples, {:?}",
        signal.hour,
        config.num_samples(),
        params
    );

    let bed = generate_sine_stack(
        duration_s,
        sample_rate,
        &HARMONIC_PARTIALS,
        params.harmonic_amplitude,
    );

    let noise = generate_noise(rng, duration_s, sample_rate, params.noise_amplitude);
    let noise = shape_noise(&noise, params.cutoff_hz, sample_rate, cache)?;

    let mut mixed = mix(&bed, &noise)?;
    apply_lfo(
        &mut mixed,
        params.lfo_rate_hz,
        params.lfo_depth,
        sample_rate,
    );

    let gain = soft_limit(&mut mixed);
    if gain < 1.0 {
        debug!("Limiter engaged on hour {:02}: gain {:.4}", signal.hour, gain);
    }

    Ok(AudioBlock::new(mixed, sample_rate))
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Day composition: one block per hourly reading, concatenated in order
//!
//! Each block gets its own random generator derived from the base seed and
//! the block index. Blocks therefore render identically whether they run one
//! after the other or spread across the rayon thread pool.

use super::wav::{write_wav, WavSampleFormat};
use super::{render_block_with_cache, AudioBlock, RenderConfig};
use crate::error::Result;
use crate::filter::CoefficientCache;
use crate::signal::HourlySignal;
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::path::Path;

/// Mix a base seed with a block index into an independent per-block seed
///
/// SplitMix64 finalizer, so neighbouring indices do not yield correlated
/// generator states.
fn block_seed(base_seed: u64, index: usize) -> u64 {
    let step = (index as u64).wrapping_add(1);
    let mut z = base_seed.wrapping_add(step.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Renders sequences of hourly signals into one continuous recording
///
/// # Examples
///
/// ```
/// use codex_audio::render::{DayComposer, RenderConfig};
/// use codex_audio::signal::HourlySignal;
///
/// let config = RenderConfig::new(0.5, 8000).unwrap();
/// let hours: Vec<HourlySignal> = (0..3)
///     .map(|h| HourlySignal::new(h, 0.2, h as f64, 10.0, 0.5))
///     .collect();
///
/// let day = DayComposer::new(config).with_seed(7).compose(&hours).unwrap();
/// assert_eq!(day.len(), 3 * 4000);
/// ```
#[derive(Debug)]
pub struct DayComposer {
    config: RenderConfig,
    seed: Option<u64>,
    parallel: bool,
    format: WavSampleFormat,
    cache: CoefficientCache,
}

impl DayComposer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            seed: None,
            parallel: true,
            format: WavSampleFormat::default(),
            cache: CoefficientCache::new(),
        }
    }

    /// Fix the base seed so repeated compositions are bit-identical
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same as [`DayComposer::with_seed`], accepting an optional seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Render blocks on the rayon thread pool (default) or sequentially
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sample encoding used by [`DayComposer::compose_to_file`]
    pub fn with_format(mut self, format: WavSampleFormat) -> Self {
        self.format = format;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render every signal and concatenate the blocks in input order
    ///
    /// An empty input yields an empty block.
    pub fn compose(&self, signals: &[HourlySignal]) -> Result<AudioBlock> {
        let base_seed = match self.seed {
            Some(seed) => seed,
            None => StdRng::from_os_rng().next_u64(),
        };
        let mode = if self.parallel { "parallel" } else { "sequential" };
        info!(
            "Composing {} blocks of {:.1}s at {} Hz ({})",
            signals.len(),
            self.config.duration_s(),
            self.config.sample_rate(),
            mode
        );

        let render = |(index, signal): (usize, &HourlySignal)| -> Result<AudioBlock> {
            let mut rng = StdRng::seed_from_u64(block_seed(base_seed, index));
            render_block_with_cache(signal, &self.config, &mut rng, Some(&self.cache))
        };

        let blocks: Vec<AudioBlock> = if self.parallel {
            signals
                .par_iter()
                .enumerate()
                .map(render)
                .collect::<Result<_>>()?
        } else {
            signals.iter().enumerate().map(render).collect::<Result<_>>()?
        };

        AudioBlock::concat(blocks, self.config.sample_rate())
    }

    /// Compose and persist the result as a mono WAV at `path`
    ///
    /// The destination is written atomically; on failure nothing is left at
    /// `path` and the error is returned.
    pub fn compose_to_file<P: AsRef<Path>>(
        &self,
        signals: &[HourlySignal],
        path: P,
    ) -> Result<AudioBlock> {
        let day = self.compose(signals)?;
        write_wav(path, &day, self.format)?;
        Ok(day)
    }
}

/// Render and concatenate `signals`, optionally persisting to `out_path`
///
/// Convenience wrapper over [`DayComposer`] with default settings: parallel
/// rendering, 16-bit output, and a fresh random seed unless `seed` is given.
pub fn compose_day(
    signals: &[HourlySignal],
    config: &RenderConfig,
    seed: Option<u64>,
    out_path: Option<&Path>,
) -> Result<AudioBlock> {
    let composer = DayComposer::new(*config).with_optional_seed(seed);
    match out_path {
        Some(path) => composer.compose_to_file(signals, path),
        None => composer.compose(signals),
    }
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Gaussian Noise Bed
//!
//! Broadband noise drawn from a standard normal distribution. This is the only
//! stochastic stage of the renderer, so it never reaches for an ambient random
//! source: the caller passes the generator in, and a fixed seed reproduces
//! the exact same samples.
//!
//! ## Examples
//!
//! ```rust
//! use codex_audio::synthesis::NoiseGenerator;
//!
//! let mut a = NoiseGenerator::new(12345);
//! let mut b = NoiseGenerator::new(12345);
//! assert_eq!(a.generate_mono(480, 0.16), b.generate_mono(480, 0.16));
//! ```

use super::sample_count;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

/// Draw `floor(duration_s * sample_rate)` normal samples scaled by `amplitude`
pub fn generate_noise<R: Rng + ?Sized>(
    rng: &mut R,
    duration_s: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Vec<f32> {
    let num_samples = sample_count(duration_s, sample_rate);
    (0..num_samples)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            (z * amplitude) as f32
        })
        .collect()
}

/// Seedable source of Gaussian white noise
///
/// Wraps a [`StdRng`] so each render task can own an independent generator
/// instead of contending on shared state.
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    rng: StdRng,
}

impl NoiseGenerator {
    /// Creates a new noise generator with a given seed.
    ///
    /// The same seed always yields the same sequence of samples.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a new noise generator seeded from operating system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generates a single value from a standard Gaussian distribution.
    pub fn random_gaussian(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Generates `num_samples` of mono Gaussian noise scaled by `amplitude`.
    pub fn generate_mono(&mut self, num_samples: usize, amplitude: f64) -> Vec<f32> {
        (0..num_samples)
            .map(|_| (self.random_gaussian() * amplitude) as f32)
            .collect()
    }
}

impl RngCore for NoiseGenerator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

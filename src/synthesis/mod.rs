// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal generators and per-sample processors
//!
//! Each stage of the rendering chain lives in its own module and works on
//! plain `f32` sample buffers:
//!
//! - [`harmonic`]: multi-partial sine bed
//! - [`noise_generator`]: Gaussian noise bed from an explicit RNG handle
//! - [`mixer`]: element-wise sum of two equally shaped buffers
//! - [`modulation`]: sinusoidal tremolo (LFO)
//! - [`limiter`]: peak-based safety rescale

pub mod harmonic;
pub mod limiter;
pub mod mixer;
pub mod modulation;
pub mod noise_generator;

pub use harmonic::{generate_sine_stack, HARMONIC_PARTIALS};
pub use limiter::{soft_limit, LIMIT_TARGET, LIMIT_THRESHOLD};
pub use mixer::mix;
pub use modulation::{apply_lfo, MAX_LFO_DEPTH, MIN_LFO_RATE_HZ};
pub use noise_generator::{generate_noise, NoiseGenerator};

/// Number of samples covering `duration_s` at `sample_rate`, i.e. `floor(d * r)`
///
/// Negative or non-finite durations yield zero samples; callers validate
/// durations before reaching this point.
pub fn sample_count(duration_s: f64, sample_rate: u32) -> usize {
    let samples = duration_s * sample_rate as f64;
    if samples.is_finite() && samples > 0.0 {
        samples.floor() as usize
    } else {
        0
    }
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Harmonic bed: a fundamental plus octave partials

use super::sample_count;
use std::f64::consts::PI;

/// Fundamental and two octave partials, in Hz
pub const HARMONIC_PARTIALS: [f64; 3] = [55.0, 110.0, 220.0];

/// Sum a stack of sines and scale it to `amplitude`
///
/// The time axis has `floor(duration_s * sample_rate)` evenly spaced points
/// over `[0, duration_s)`. The sum is scaled by `amplitude / freqs.len()` so
/// the partials share the target loudness evenly. An empty frequency list
/// gives silence.
pub fn generate_sine_stack(
    duration_s: f64,
    sample_rate: u32,
    freqs: &[f64],
    amplitude: f64,
) -> Vec<f32> {
    let num_samples = sample_count(duration_s, sample_rate);
    if freqs.is_empty() {
        return vec![0.0; num_samples];
    }

    let step = duration_s / num_samples.max(1) as f64;
    let scale = amplitude / freqs.len() as f64;

    (0..num_samples)
        .map(|i| {
            let t = i as f64 * step;
            let sum: f64 = freqs.iter().map(|&f| (2.0 * PI * f * t).sin()).sum();
            (sum * scale) as f32
        })
        .collect()
}

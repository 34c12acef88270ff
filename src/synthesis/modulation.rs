// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Sinusoidal amplitude modulation (tremolo)

use std::f64::consts::PI;

/// Slowest LFO rate accepted, in Hz
pub const MIN_LFO_RATE_HZ: f64 = 0.01;

/// Deepest modulation accepted (full on/off tremolo)
pub const MAX_LFO_DEPTH: f64 = 1.0;

/// Multiply `signal` in place by `1 + depth * sin(2π * rate * t)`
///
/// `t = n / sample_rate` for sample index `n`. Depth is clamped to
/// `[0, 1]` and the rate floored at [`MIN_LFO_RATE_HZ`].
pub fn apply_lfo(signal: &mut [f32], rate_hz: f64, depth: f64, sample_rate: u32) {
    let depth = if depth.is_finite() {
        depth.clamp(0.0, MAX_LFO_DEPTH)
    } else {
        0.0
    };
    let rate = if rate_hz.is_finite() {
        rate_hz.max(MIN_LFO_RATE_HZ)
    } else {
        MIN_LFO_RATE_HZ
    };
    let sample_rate = sample_rate.max(1) as f64;

    for (n, sample) in signal.iter_mut().enumerate() {
        let t = n as f64 / sample_rate;
        let gain = 1.0 + depth * (2.0 * PI * rate * t).sin();
        *sample = (*sample as f64 * gain) as f32;
    }
}

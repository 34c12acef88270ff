// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Peak-based safety limiter

/// Peak above which the whole signal is rescaled
pub const LIMIT_THRESHOLD: f32 = 0.99;

/// Peak after a rescale
pub const LIMIT_TARGET: f32 = 0.98;

/// Rescale `signal` in place when its peak exceeds [`LIMIT_THRESHOLD`]
///
/// The new peak is [`LIMIT_TARGET`]. Signals at or under the threshold are
/// left untouched, and so is an all-zero or empty signal. Returns the gain
/// that was applied.
pub fn soft_limit(signal: &mut [f32]) -> f32 {
    let peak = signal.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));

    if peak <= LIMIT_THRESHOLD {
        return 1.0;
    }

    let gain = LIMIT_TARGET / peak;
    signal.iter_mut().for_each(|s| *s *= gain);
    gain
}

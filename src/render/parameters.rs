// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Mapping from environmental readings to synthesis parameters
//!
//! | reading          | parameter           | range            |
//! |------------------|---------------------|------------------|
//! | cloud cover      | harmonic amplitude  | 0.0 – 0.4        |
//! | wind speed       | noise amplitude     | 0.0 – 0.4        |
//! | wind speed       | lowpass cutoff      | 500 – 2000 Hz    |
//! | sun altitude     | LFO rate            | 0.05 – 0.6 Hz    |
//! | moon phase       | LFO depth           | 0.15 – 0.6       |

use crate::signal::HourlySignal;

/// Loudest harmonic bed, reached under a clear sky
pub const MAX_HARMONIC_AMPLITUDE: f64 = 0.4;

/// Loudest noise bed
pub const MAX_NOISE_AMPLITUDE: f64 = 0.4;

/// Wind speed at which the noise bed stops getting louder, m/s
pub const NOISE_SATURATION_MPS: f64 = 10.0;

/// Cutoff for calm air, Hz
pub const CALM_CUTOFF_HZ: f64 = 500.0;

/// Cutoff added between calm and storm, Hz
pub const CUTOFF_SPAN_HZ: f64 = 1500.0;

/// Wind speed at which the cutoff stops rising, m/s
pub const STORM_WIND_MPS: f64 = 15.0;

/// Harmonic bed amplitude: darker sky, quieter bed
pub fn harmonic_amplitude(cloud_cover: f64) -> f64 {
    MAX_HARMONIC_AMPLITUDE * (1.0 - cloud_cover)
}

/// Noise bed amplitude, capped once wind reaches [`NOISE_SATURATION_MPS`]
pub fn noise_amplitude(wind_mps: f64) -> f64 {
    (wind_mps / NOISE_SATURATION_MPS).min(1.0) * MAX_NOISE_AMPLITUDE
}

/// Lowpass cutoff: calm air is darker, storms are brighter
pub fn cutoff_hz(wind_mps: f64) -> f64 {
    CALM_CUTOFF_HZ + CUTOFF_SPAN_HZ * (wind_mps.min(STORM_WIND_MPS) / STORM_WIND_MPS)
}

/// LFO rate from sun altitude mapped linearly from [-90, 90] to [0.05, 0.6] Hz
pub fn lfo_rate_hz(sun_altitude_deg: f64) -> f64 {
    let normalized = (sun_altitude_deg + 90.0) / 180.0;
    0.05 + 0.55 * normalized
}

/// LFO depth: new moon is subtle, full moon is deep
pub fn lfo_depth(moon_phase: f64) -> f64 {
    0.15 + 0.45 * moon_phase
}

/// All parameters derived from one canonical signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockParameters {
    pub harmonic_amplitude: f64,
    pub noise_amplitude: f64,
    pub cutoff_hz: f64,
    pub lfo_rate_hz: f64,
    pub lfo_depth: f64,
}

impl BlockParameters {
    /// Derive parameters from `signal`, normalizing it first
    pub fn from_signal(signal: &HourlySignal) -> Self {
        let signal = signal.normalized();
        Self {
            harmonic_amplitude: harmonic_amplitude(signal.cloud_cover),
            noise_amplitude: noise_amplitude(signal.wind_mps),
            cutoff_hz: cutoff_hz(signal.wind_mps),
            lfo_rate_hz: lfo_rate_hz(signal.sun_altitude_deg),
            lfo_depth: lfo_depth(signal.moon_phase),
        }
    }
}

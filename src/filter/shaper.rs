// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Spectral shaping of the noise bed

use super::butter_lowpass::{ButterLowpassFilter, CoefficientCache};
use super::Filter;
use crate::error::{Result, SonifyError};
use log::error;

/// Butterworth order used for the noise bed
pub const SHAPER_ORDER: usize = 4;

/// Lowest cutoff the shaper will design for, in Hz
const MIN_CUTOFF_HZ: f64 = 10.0;

/// Highest cutoff as a fraction of Nyquist
const MAX_NYQUIST_FRACTION: f64 = 0.99;

/// Clamp a cutoff strictly inside (0, Nyquist)
///
/// The lower bound is applied first, so tiny sample rates still end up
/// below Nyquist.
pub fn clamp_cutoff(cutoff_hz: f64, sample_rate: u32) -> f64 {
    let nyquist = sample_rate as f64 / 2.0;
    cutoff_hz.max(MIN_CUTOFF_HZ).min(nyquist * MAX_NYQUIST_FRACTION)
}

/// Lowpass the noise bed at `cutoff_hz`
///
/// Coefficients come from `cache` when one is given. Fails with
/// [`SonifyError::FilterDesign`] if the filtered output is not finite.
pub fn shape_noise(
    noise: &[f32],
    cutoff_hz: f64,
    sample_rate: u32,
    cache: Option<&CoefficientCache>,
) -> Result<Vec<f32>> {
    let cutoff = clamp_cutoff(cutoff_hz, sample_rate);
    let filter = match cache {
        Some(cache) => ButterLowpassFilter::with_cache(cutoff, sample_rate, SHAPER_ORDER, cache)?,
        None => ButterLowpassFilter::new(cutoff, sample_rate, SHAPER_ORDER)?,
    };
    let shaped = filter.apply(noise);

    if let Some(index) = shaped.iter().position(|s| !s.is_finite()) {
        error!(
            "Lowpass at {:.1} Hz ({} Hz sample rate) produced a non-finite sample at {}",
            cutoff, sample_rate, index
        );
        return Err(SonifyError::FilterDesign(format!(
            "lowpass at {:.1} Hz produced a non-finite sample at index {}",
            cutoff, index
        )));
    }

    Ok(shaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_cutoff_bounds() {
        assert_eq!(clamp_cutoff(900.0, 8000), 900.0);
        assert_eq!(clamp_cutoff(1.0, 48000), 10.0);
        assert_eq!(clamp_cutoff(30000.0, 48000), 23760.0);
        // 0.99 * Nyquist wins over the 10 Hz floor
        assert!(clamp_cutoff(500.0, 16) < 8.0);
    }

    #[test]
    fn test_shape_noise_keeps_length_and_silence() {
        let noise = vec![0.0f32; 256];
        let shaped = shape_noise(&noise, 500.0, 8000, None).unwrap();
        assert_eq!(shaped.len(), 256);
        assert!(shaped.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_non_finite_output_is_an_error() {
        let mut noise = vec![0.1f32; 64];
        noise[10] = f32::NAN;
        let result = shape_noise(&noise, 900.0, 8000, None);
        assert!(matches!(result, Err(SonifyError::FilterDesign(_))));

        noise[10] = f32::INFINITY;
        let cache = CoefficientCache::new();
        assert!(shape_noise(&noise, 900.0, 8000, Some(&cache)).is_err());
    }

    #[test]
    fn test_shape_noise_uses_cache() {
        let cache = CoefficientCache::new();
        let noise = vec![0.1f32; 32];
        let first = shape_noise(&noise, 900.0, 8000, Some(&cache)).unwrap();
        let second = shape_noise(&noise, 900.0, 8000, Some(&cache)).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);

        let uncached = shape_noise(&noise, 900.0, 8000, None).unwrap();
        assert_eq!(first, uncached);
    }
}

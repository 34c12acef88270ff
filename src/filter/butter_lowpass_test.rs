// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::butter_lowpass::{design_butter_lowpass, ButterLowpassFilter, CoefficientCache};
use super::iir::IirFilter;
use super::Filter;
use crate::error::SonifyError;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    // Helper to build a sine wave test signal
    fn sine(freq: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
        (0..num_samples)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate as f64).sin() as f32)
            .collect()
    }

    // RMS over the second half, once the filter has settled
    fn settled_rms(signal: &[f32]) -> f32 {
        let tail = &signal[signal.len() / 2..];
        (tail.iter().map(|&x| x * x).sum::<f32>() / tail.len() as f32).sqrt()
    }

    #[test]
    fn test_second_order_coefficients_match_reference() {
        // scipy.signal.butter(2, 0.5)
        let tf = design_butter_lowpass(2, 0.5).unwrap();
        let b = tf.b();
        let a = tf.a();

        assert_abs_diff_eq!(b[0], 0.292_893_22, epsilon = 1e-6);
        assert_abs_diff_eq!(b[1], 0.585_786_44, epsilon = 1e-6);
        assert_abs_diff_eq!(b[2], 0.292_893_22, epsilon = 1e-6);
        assert_abs_diff_eq!(a[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a[2], 0.171_572_88, epsilon = 1e-6);
    }

    #[test]
    fn test_fourth_order_has_unity_dc_gain_and_binomial_numerator() {
        let tf = design_butter_lowpass(4, 900.0 / 4000.0).unwrap();
        assert_eq!(tf.order(), 4);
        assert_eq!(tf.b().len(), 5);
        assert_eq!(tf.a().len(), 5);
        assert_eq!(IirFilter::new(tf.clone()).transfer_function().order(), 4);

        let dc_gain = tf.b().iter().sum::<f64>() / tf.a().iter().sum::<f64>();
        assert_abs_diff_eq!(dc_gain, 1.0, epsilon = 1e-9);

        let b = tf.b();
        assert_abs_diff_eq!(b[1] / b[0], 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b[2] / b[0], 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b[3] / b[0], 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b[4] / b[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lowpass_frequency_response() {
        let sample_rate = 8000;
        let filter = ButterLowpassFilter::new(900.0, sample_rate, 4).unwrap();

        let pass = filter.apply(&sine(100.0, sample_rate, 8000));
        let stop = filter.apply(&sine(3000.0, sample_rate, 8000));

        let pass_rms = settled_rms(&pass);
        let stop_rms = settled_rms(&stop);
        let reference = std::f32::consts::FRAC_1_SQRT_2;

        println!("passband RMS: {}, stopband RMS: {}", pass_rms, stop_rms);
        assert!((pass_rms / reference) > 0.95, "passband attenuated");
        assert!((stop_rms / reference) < 0.01, "stopband not attenuated");
    }

    #[test]
    fn test_impulse_response_decays() {
        let filter = ButterLowpassFilter::new(500.0, 48000, 4).unwrap();
        let mut impulse = vec![0.0f32; 48000];
        impulse[0] = 1.0;

        let response = filter.apply(&impulse);
        let tail_peak = response[40000..]
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(tail_peak < 1e-6);
    }

    #[test]
    fn test_streaming_matches_apply() {
        let filter = ButterLowpassFilter::new(1200.0, 16000, 4).unwrap();
        let input = sine(440.0, 16000, 1000);

        let whole = filter.apply(&input);

        let mut stream = filter.stream();
        let mut chunked = input.clone();
        for chunk in chunked.chunks_mut(128) {
            stream.process_block(chunk);
        }

        assert_eq!(whole, chunked);
    }

    #[test]
    fn test_degenerate_cutoff_is_rejected() {
        for cutoff in [0.0, -10.0, 4000.0, 5000.0, f64::NAN] {
            let result = ButterLowpassFilter::new(cutoff, 8000, 4);
            assert!(
                matches!(result, Err(SonifyError::FilterDesign(_))),
                "cutoff {} should fail",
                cutoff
            );
        }

        assert!(matches!(
            ButterLowpassFilter::new(500.0, 0, 4),
            Err(SonifyError::FilterDesign(_))
        ));
        assert!(matches!(
            design_butter_lowpass(0, 0.5),
            Err(SonifyError::FilterDesign(_))
        ));
    }

    #[test]
    fn test_cache_reuses_designs() {
        let cache = CoefficientCache::new();
        assert!(cache.is_empty());

        let a = ButterLowpassFilter::with_cache(900.0, 8000, 4, &cache).unwrap();
        let b = ButterLowpassFilter::with_cache(900.0, 8000, 4, &cache).unwrap();
        let c = ButterLowpassFilter::with_cache(2000.0, 8000, 4, &cache).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(a.transfer_function(), b.transfer_function());
        assert_ne!(a.transfer_function(), c.transfer_function());
    }
}

use anyhow::Result;
use approx::assert_abs_diff_eq;
use codex_audio::render::{render_block, BlockParameters, RenderConfig};
use codex_audio::signal::{HourlySignal, SignalReading};
use codex_audio::synthesis::NoiseGenerator;
use codex_audio::SonifyError;

fn reference_signal() -> HourlySignal {
    HourlySignal::new(12, 0.3, 4.0, 25.0, 0.7)
}

fn assert_within_limit(samples: &[f32]) {
    for (i, &s) in samples.iter().enumerate() {
        assert!(s.is_finite(), "sample {} is not finite", i);
        assert!((-0.99..=0.99).contains(&s), "sample {} = {}", i, s);
    }
}

#[test]
fn test_reference_scenario() -> Result<()> {
    let config = RenderConfig::new(2.0, 8000)?;
    let mut rng = NoiseGenerator::new(2025);

    let block = render_block(&reference_signal(), &config, &mut rng)?;

    assert_eq!(block.len(), 16000);
    assert_eq!(block.sample_rate(), 8000);
    assert_within_limit(block.samples());

    let params = BlockParameters::from_signal(&reference_signal());
    assert_abs_diff_eq!(params.harmonic_amplitude, 0.28, epsilon = 1e-12);
    assert_abs_diff_eq!(params.noise_amplitude, 0.16, epsilon = 1e-12);
    assert_abs_diff_eq!(params.cutoff_hz, 900.0, epsilon = 1e-9);
    assert_abs_diff_eq!(params.lfo_rate_hz, 0.401_388_9, epsilon = 1e-6);
    assert_abs_diff_eq!(params.lfo_depth, 0.465, epsilon = 1e-12);

    Ok(())
}

#[test]
fn test_zero_duration_renders_empty_block() -> Result<()> {
    let config = RenderConfig::new(0.0, 48000)?;
    let mut rng = NoiseGenerator::new(1);
    let block = render_block(&reference_signal(), &config, &mut rng)?;
    assert!(block.is_empty());
    Ok(())
}

#[test]
fn test_length_law() -> Result<()> {
    let cases = [(1.0, 8000), (0.5, 44100), (0.123, 48000), (1.0 / 3.0, 22050), (2.5, 1000)];
    for (duration, rate) in cases {
        let config = RenderConfig::new(duration, rate)?;
        let mut rng = NoiseGenerator::new(3);
        let block = render_block(&reference_signal(), &config, &mut rng)?;
        assert_eq!(
            block.len(),
            (duration * rate as f64).floor() as usize,
            "duration {} at {} Hz",
            duration,
            rate
        );
    }
    Ok(())
}

#[test]
fn test_amplitude_bound_across_extremes() -> Result<()> {
    let config = RenderConfig::new(1.0, 8000)?;
    let extremes = [
        HourlySignal::new(0, 0.0, 0.0, -90.0, 0.0),
        HourlySignal::new(1, 0.0, 100.0, 90.0, 1.0),
        HourlySignal::new(2, 1.0, 100.0, 0.0, 1.0),
        HourlySignal::new(3, 0.0, 10.0, 45.0, 1.0),
        HourlySignal::new(4, 1.0, 0.0, 90.0, 0.0),
    ];

    for (seed, signal) in extremes.iter().enumerate() {
        let mut rng = NoiseGenerator::new(seed as u64);
        let block = render_block(signal, &config, &mut rng)?;
        assert_within_limit(block.samples());
    }
    Ok(())
}

#[test]
fn test_limiter_engages_on_loud_signals() -> Result<()> {
    // clear sky, storm, full moon: peaks well above the threshold before limiting
    let signal = HourlySignal::new(0, 0.0, 30.0, 90.0, 1.0);
    let config = RenderConfig::new(2.0, 8000)?;
    let mut rng = NoiseGenerator::new(77);

    let block = render_block(&signal, &config, &mut rng)?;
    assert_abs_diff_eq!(block.peak(), 0.98, epsilon = 1e-5);
    Ok(())
}

#[test]
fn test_calm_overcast_sky_is_silent() -> Result<()> {
    // no harmonic bed, no wind noise
    let signal = HourlySignal::new(0, 1.0, 0.0, 0.0, 0.5);
    let config = RenderConfig::new(0.5, 8000)?;
    let mut rng = NoiseGenerator::new(5);

    let block = render_block(&signal, &config, &mut rng)?;
    assert!(block.samples().iter().all(|&s| s.abs() < 1e-6));
    Ok(())
}

#[test]
fn test_same_seed_reproduces_block() -> Result<()> {
    let config = RenderConfig::new(0.5, 8000)?;

    let a = render_block(&reference_signal(), &config, &mut NoiseGenerator::new(9))?;
    let b = render_block(&reference_signal(), &config, &mut NoiseGenerator::new(9))?;
    let c = render_block(&reference_signal(), &config, &mut NoiseGenerator::new(10))?;

    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn test_malformed_reading_renders_with_defaults() -> Result<()> {
    let json = r#"{"hour": 3, "cloudCover": "thick", "windMps": -12, "moonPhase": 7}"#;
    let reading: SignalReading = serde_json::from_str(json)?;
    let signal = HourlySignal::from(reading);
    assert_eq!(signal.cloud_cover, 0.0);
    assert_eq!(signal.wind_mps, 0.0);
    assert_eq!(signal.moon_phase, 1.0);

    let config = RenderConfig::new(0.25, 8000)?;
    let block = render_block(&signal, &config, &mut NoiseGenerator::new(0))?;
    assert_eq!(block.len(), 2000);
    assert_within_limit(block.samples());
    Ok(())
}

#[test]
fn test_infinite_readings_clamp_instead_of_resetting() -> Result<()> {
    let signal = HourlySignal::new(
        6,
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
    );
    let params = BlockParameters::from_signal(&signal);
    assert_eq!(params.harmonic_amplitude, 0.0);
    assert_eq!(params.noise_amplitude, 0.4);
    assert_eq!(params.cutoff_hz, 2000.0);
    assert_eq!(params.lfo_rate_hz, 0.05);
    assert_abs_diff_eq!(params.lfo_depth, 0.6, epsilon = 1e-12);

    let config = RenderConfig::new(0.5, 8000)?;
    let block = render_block(&signal, &config, &mut NoiseGenerator::new(12))?;
    assert_eq!(block.len(), 4000);
    assert_within_limit(block.samples());
    Ok(())
}

#[test]
fn test_low_sample_rates_still_render() -> Result<()> {
    // Nyquist below the 10 Hz cutoff floor
    for rate in [1, 8, 16, 30] {
        let config = RenderConfig::new(4.0, rate)?;
        let block = render_block(&reference_signal(), &config, &mut NoiseGenerator::new(4))?;
        assert_eq!(block.len(), 4 * rate as usize);
        assert_within_limit(block.samples());
    }
    Ok(())
}

#[test]
fn test_invalid_configuration_is_rejected() {
    assert!(matches!(
        RenderConfig::new(-1.0, 8000),
        Err(SonifyError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        RenderConfig::new(1.0, 0),
        Err(SonifyError::InvalidConfiguration(_))
    ));
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Environmental readings and their normalization
//!
//! Readings arrive from noisy sources: fields may be missing, non-numeric or
//! out of range. [`SignalReading`] accepts all of that, and
//! [`HourlySignal`] is the canonical, clamped record the DSP chain consumes.
//!
//! | field            | domain      | neutral default |
//! |------------------|-------------|-----------------|
//! | `hour`           | 0..=23      | 0               |
//! | `cloudCover`     | [0, 1]      | 0.0             |
//! | `windMps`        | [0, ∞)      | 0.0             |
//! | `sunAltitudeDeg` | [-90, 90]   | 0.0             |
//! | `moonPhase`      | [0, 1]      | 0.0             |
//!
//! # Examples
//!
//! ```
//! use codex_audio::signal::{HourlySignal, SignalReading};
//!
//! let reading: SignalReading =
//!     serde_json::from_str(r#"{"cloudCover": 1.7, "windMps": "4", "moonPhase": null}"#).unwrap();
//! let signal = HourlySignal::from(reading);
//! assert_eq!(signal.cloud_cover, 1.0);
//! assert_eq!(signal.wind_mps, 4.0);
//! assert_eq!(signal.moon_phase, 0.0);
//! ```

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical hourly environmental reading
///
/// Fields are public so callers can build signals directly; the renderer
/// always runs [`HourlySignal::normalized`] once before using them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySignal {
    /// Hour of the day (informational, not used by the DSP chain)
    pub hour: u8,
    /// Cloud cover, 0 = clear sky, 1 = fully overcast
    pub cloud_cover: f64,
    /// Wind speed in meters per second
    pub wind_mps: f64,
    /// Sun elevation angle in degrees
    pub sun_altitude_deg: f64,
    /// Moon phase, 0 = new moon, 1 = full moon
    pub moon_phase: f64,
}

impl Default for HourlySignal {
    fn default() -> Self {
        Self {
            hour: 0,
            cloud_cover: 0.0,
            wind_mps: 0.0,
            sun_altitude_deg: 0.0,
            moon_phase: 0.0,
        }
    }
}

impl HourlySignal {
    /// Build a signal and clamp every field into its domain
    pub fn new(
        hour: u8,
        cloud_cover: f64,
        wind_mps: f64,
        sun_altitude_deg: f64,
        moon_phase: f64,
    ) -> Self {
        Self {
            hour,
            cloud_cover,
            wind_mps,
            sun_altitude_deg,
            moon_phase,
        }
        .normalized()
    }

    /// Return a copy with every field clamped into its documented domain.
    ///
    /// NaN falls back to the neutral default; infinities clamp to the nearest
    /// bound like any other out-of-range value. The operation is
    /// idempotent: normalizing a canonical signal returns it unchanged.
    pub fn normalized(&self) -> Self {
        let normalized = Self {
            hour: self.hour.min(23),
            cloud_cover: clamp_or_default(self.cloud_cover, 0.0, 1.0),
            wind_mps: clamp_or_default(self.wind_mps, 0.0, f64::MAX),
            sun_altitude_deg: clamp_or_default(self.sun_altitude_deg, -90.0, 90.0),
            moon_phase: clamp_or_default(self.moon_phase, 0.0, 1.0),
        };

        if normalized != *self {
            debug!("Clamped hourly signal {:?} to {:?}", self, normalized);
        }

        normalized
    }
}

/// Clamp `value` into `[min, max]`, mapping NaN to 0.0
fn clamp_or_default(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// A raw reading as received from an upstream source
///
/// Every field is optional. Values that are not numbers (or numeric strings)
/// deserialize as `None` instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalReading {
    #[serde(default, deserialize_with = "lenient_number")]
    pub hour: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cloud_cover: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wind_mps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sun_altitude_deg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub moon_phase: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        _ => None,
    }))
}

impl From<SignalReading> for HourlySignal {
    fn from(reading: SignalReading) -> Self {
        let hour = match reading.hour {
            Some(h) if h.is_finite() => h.trunc().clamp(0.0, 23.0) as u8,
            _ => 0,
        };

        HourlySignal {
            hour,
            cloud_cover: reading.cloud_cover.unwrap_or(0.0),
            wind_mps: reading.wind_mps.unwrap_or(0.0),
            sun_altitude_deg: reading.sun_altitude_deg.unwrap_or(0.0),
            moon_phase: reading.moon_phase.unwrap_or(0.0),
        }
        .normalized()
    }
}

/// A day of readings for one location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalBundle {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub hours: Vec<SignalReading>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReadingsDocument {
    Bundle(SignalBundle),
    List(Vec<SignalReading>),
}

impl SignalBundle {
    /// Parse either a full bundle object or a bare array of readings
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<ReadingsDocument>(json)? {
            ReadingsDocument::Bundle(bundle) => Ok(bundle),
            ReadingsDocument::List(hours) => Ok(Self {
                hours,
                ..Self::default()
            }),
        }
    }

    /// Normalized signals in bundle order
    pub fn signals(&self) -> Vec<HourlySignal> {
        self.hours.iter().cloned().map(HourlySignal::from).collect()
    }
}

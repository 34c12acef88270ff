// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Per-call render settings

use crate::error::{Result, SonifyError};
use crate::synthesis::sample_count;

/// Default block duration in seconds
pub const DEFAULT_DURATION_S: f64 = 60.0;

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Duration and sample rate shared by every stage of one render call
///
/// Construct it through [`RenderConfig::new`], which rejects negative or
/// non-finite durations and a zero sample rate. A zero duration is allowed
/// and renders an empty block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    duration_s: f64,
    sample_rate: u32,
}

impl RenderConfig {
    pub fn new(duration_s: f64, sample_rate: u32) -> Result<Self> {
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(SonifyError::InvalidConfiguration(format!(
                "duration must be a finite, non-negative number of seconds (got {})",
                duration_s
            )));
        }
        if sample_rate == 0 {
            return Err(SonifyError::InvalidConfiguration(
                "sample rate must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            duration_s,
            sample_rate,
        })
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// `floor(duration_s * sample_rate)`
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration_s, self.sample_rate)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            duration_s: DEFAULT_DURATION_S,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

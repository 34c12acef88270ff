// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Render settings section

use crate::render::{DEFAULT_DURATION_S, DEFAULT_SAMPLE_RATE};
use serde::{Deserialize, Serialize};

/// Settings shared by every block of a render run.
///
/// # Example
///
/// ```
/// use codex_audio::config::RenderSection;
///
/// let render = RenderSection {
///     duration_s: 2.0,
///     sample_rate: 8000,
///     seed: Some(42),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSection {
    /// Length of each hourly block in seconds
    #[serde(default = "default_duration_s")]
    pub duration_s: f64,

    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Base seed for the noise bed; fresh entropy is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_duration_s() -> f64 {
    DEFAULT_DURATION_S
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            duration_s: default_duration_s(),
            sample_rate: default_sample_rate(),
            seed: None,
        }
    }
}

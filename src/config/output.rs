// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Output settings section

use crate::render::WavSampleFormat;
use serde::{Deserialize, Serialize};

/// How rendered audio is produced and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Sample encoding of written WAV files (`int16` or `float32`)
    #[serde(default)]
    pub sample_format: WavSampleFormat,

    /// Render the blocks of a day on all cores
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            sample_format: WavSampleFormat::default(),
            parallel: default_parallel(),
        }
    }
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rendered mono audio

use crate::error::{Result, SonifyError};

/// An immutable block of mono samples at a fixed sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlock {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBlock {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// A block with no samples
    pub fn empty(sample_rate: u32) -> Self {
        Self::new(Vec::new(), sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds
    pub fn duration_s(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value, 0.0 for an empty block
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }

    /// Concatenate blocks end to end, in iteration order
    ///
    /// Every block must share `sample_rate`. No blocks gives an empty block.
    pub fn concat<I>(blocks: I, sample_rate: u32) -> Result<Self>
    where
        I: IntoIterator<Item = AudioBlock>,
    {
        let mut samples = Vec::new();
        for block in blocks {
            if block.sample_rate != sample_rate {
                return Err(SonifyError::ShapeMismatch {
                    left: format!("{} Hz", sample_rate),
                    right: format!("{} Hz", block.sample_rate),
                });
            }
            samples.extend_from_slice(&block.samples);
        }
        Ok(Self::new(samples, sample_rate))
    }
}

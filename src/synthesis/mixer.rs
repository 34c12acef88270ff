// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Element-wise mixing of two buffers

use crate::error::{Result, SonifyError};

/// Sum two buffers sample by sample, without any scaling
///
/// Both buffers must have the same length; a mismatch is reported as
/// [`SonifyError::ShapeMismatch`] rather than truncated or broadcast.
pub fn mix(left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
    if left.len() != right.len() {
        return Err(SonifyError::ShapeMismatch {
            left: format!("{} samples", left.len()),
            right: format!("{} samples", right.len()),
        });
    }

    Ok(left.iter().zip(right).map(|(&l, &r)| l + r).collect())
}

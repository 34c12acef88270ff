// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Causal IIR filtering in Direct Form II Transposed

use crate::error::{Result, SonifyError};

/// Numerator/denominator coefficients of a digital filter
///
/// The denominator is normalized so that `a[0] == 1.0`, and both vectors
/// are padded to the same length. Trailing positions where both sides are
/// zero are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl TransferFunction {
    /// Build a transfer function from raw `(b, a)` coefficients
    ///
    /// Fails if either vector is empty, `a[0]` is zero, or any coefficient
    /// is not finite.
    pub fn new(mut b: Vec<f64>, mut a: Vec<f64>) -> Result<Self> {
        if b.is_empty() || a.is_empty() {
            return Err(SonifyError::FilterDesign(
                "transfer function needs at least one coefficient on each side".to_string(),
            ));
        }
        if b.iter().chain(a.iter()).any(|c| !c.is_finite()) {
            return Err(SonifyError::FilterDesign(
                "transfer function has non-finite coefficients".to_string(),
            ));
        }

        let a0 = a[0];
        if a0 == 0.0 {
            return Err(SonifyError::FilterDesign(
                "leading denominator coefficient is zero".to_string(),
            ));
        }
        if a0 != 1.0 {
            b.iter_mut().for_each(|c| *c /= a0);
            a.iter_mut().for_each(|c| *c /= a0);
        }

        let len = b.len().max(a.len());
        b.resize(len, 0.0);
        a.resize(len, 0.0);

        // design routines may zero-pad past the real order
        while b.len() > 1 && b[b.len() - 1] == 0.0 && a[a.len() - 1] == 0.0 {
            b.pop();
            a.pop();
        }

        Ok(Self { b, a })
    }

    /// Feedforward coefficients
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Feedback coefficients (`a[0] == 1.0`)
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Filter order (number of delay elements)
    pub fn order(&self) -> usize {
        self.b.len() - 1
    }
}

/// Streaming filter state for one [`TransferFunction`]
///
/// Feeding a signal in several chunks gives the same output as feeding it in
/// one call, which makes the filter usable on real-time chunks as well as on
/// whole offline blocks.
#[derive(Debug, Clone)]
pub struct IirFilter {
    transfer: TransferFunction,
    state: Vec<f64>,
}

impl IirFilter {
    pub fn new(transfer: TransferFunction) -> Self {
        let state = vec![0.0; transfer.order()];
        Self { transfer, state }
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.state.iter_mut().for_each(|z| *z = 0.0);
    }

    pub fn transfer_function(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Filter a single sample
    #[inline]
    pub fn process(&mut self, x: f64) -> f64 {
        let b = &self.transfer.b;
        let a = &self.transfer.a;
        let n = self.state.len();

        if n == 0 {
            return b[0] * x;
        }

        let y = b[0] * x + self.state[0];
        for i in 0..n - 1 {
            self.state[i] = b[i + 1] * x - a[i + 1] * y + self.state[i + 1];
        }
        self.state[n - 1] = b[n] * x - a[n] * y;

        y
    }

    /// Filter a buffer in place
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample as f64) as f32;
        }
    }
}

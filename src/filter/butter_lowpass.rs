// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Butterworth lowpass filter using sci-rs for coefficient design
//!
//! The coefficients match SciPy's `signal.butter(order, wn, btype="low")`
//! in `(b, a)` form, and they are applied causally like `signal.lfilter`.

use super::iir::{IirFilter, TransferFunction};
use super::Filter;
use crate::error::{Result, SonifyError};
use log::debug;
use sci_rs::signal::filter::design::{butter_dyn, DigitalFilter, FilterBandType, FilterOutputType};
use std::collections::HashMap;
use std::sync::RwLock;

/// Design a digital Butterworth lowpass filter
///
/// ### Arguments
///
/// * `order` - Filter order, must be at least 1
/// * `normalized_cutoff` - Cutoff divided by the Nyquist frequency, strictly inside (0, 1)
///
/// ### Errors
///
/// Returns [`SonifyError::FilterDesign`] for a zero order, a cutoff outside
/// (0, 1), or coefficients that come out non-finite.
pub fn design_butter_lowpass(order: usize, normalized_cutoff: f64) -> Result<TransferFunction> {
    if order == 0 {
        return Err(SonifyError::FilterDesign(
            "filter order must be greater than 0".to_string(),
        ));
    }
    if !(normalized_cutoff > 0.0 && normalized_cutoff < 1.0) {
        return Err(SonifyError::FilterDesign(format!(
            "normalized cutoff {} is outside (0, 1)",
            normalized_cutoff
        )));
    }

    let filter = butter_dyn(
        order,
        vec![normalized_cutoff],       // critical frequency (normalized)
        Some(FilterBandType::Lowpass), // filter type
        Some(false),                   // analog = false (digital filter)
        Some(FilterOutputType::Ba),    // output as (b, a)
        None,                          // fs: already normalized
    );

    match filter {
        DigitalFilter::Ba(ba_filter) => TransferFunction::new(ba_filter.b, ba_filter.a),
        _ => Err(SonifyError::FilterDesign(
            "expected Ba output from butter_dyn".to_string(),
        )),
    }
}

/// Shared store of designed coefficients keyed by `(order, normalized cutoff)`
///
/// Hourly readings often repeat the same wind speed, so the composer keeps
/// one cache for a whole day of blocks.
#[derive(Debug, Default)]
pub struct CoefficientCache {
    designs: RwLock<HashMap<(usize, u64), TransferFunction>>,
}

impl CoefficientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached design or compute and store it
    pub fn get_or_design(&self, order: usize, normalized_cutoff: f64) -> Result<TransferFunction> {
        let key = (order, normalized_cutoff.to_bits());

        if let Some(found) = self
            .designs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
        {
            return Ok(found.clone());
        }

        let designed = design_butter_lowpass(order, normalized_cutoff)?;
        debug!(
            "Designed Butterworth lowpass: order {}, normalized cutoff {:.5}",
            order, normalized_cutoff
        );
        self.designs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, designed.clone());

        Ok(designed)
    }

    /// Number of distinct designs held
    pub fn len(&self) -> usize {
        self.designs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Butterworth lowpass filter
///
/// # Parameters
/// - `cutoff_freq`: Cutoff frequency in Hz, strictly below Nyquist
/// - `sample_rate`: Sample rate in Hz
/// - `order`: Filter order
#[derive(Debug, Clone)]
pub struct ButterLowpassFilter {
    cutoff_freq: f64,
    sample_rate: u32,
    order: usize,
    transfer: TransferFunction,
}

impl ButterLowpassFilter {
    /// Create a new Butterworth lowpass filter
    ///
    /// The cutoff is not clamped here; out-of-range values are rejected with
    /// [`SonifyError::FilterDesign`].
    pub fn new(cutoff_freq: f64, sample_rate: u32, order: usize) -> Result<Self> {
        let transfer = design_butter_lowpass(order, Self::normalize(cutoff_freq, sample_rate)?)?;
        Ok(Self {
            cutoff_freq,
            sample_rate,
            order,
            transfer,
        })
    }

    /// Create the filter, reusing coefficients from `cache` when available
    pub fn with_cache(
        cutoff_freq: f64,
        sample_rate: u32,
        order: usize,
        cache: &CoefficientCache,
    ) -> Result<Self> {
        let transfer = cache.get_or_design(order, Self::normalize(cutoff_freq, sample_rate)?)?;
        Ok(Self {
            cutoff_freq,
            sample_rate,
            order,
            transfer,
        })
    }

    fn normalize(cutoff_freq: f64, sample_rate: u32) -> Result<f64> {
        if sample_rate == 0 {
            return Err(SonifyError::FilterDesign(
                "sample rate must be greater than 0".to_string(),
            ));
        }
        let nyquist = sample_rate as f64 / 2.0;
        Ok(cutoff_freq / nyquist)
    }

    pub fn cutoff_freq(&self) -> f64 {
        self.cutoff_freq
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn transfer_function(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Fresh streaming state for chunked processing
    pub fn stream(&self) -> IirFilter {
        IirFilter::new(self.transfer.clone())
    }
}

impl Filter for ButterLowpassFilter {
    fn apply(&self, signal: &[f32]) -> Vec<f32> {
        let mut filtered = signal.to_vec();
        self.stream().process_block(&mut filtered);
        filtered
    }
}

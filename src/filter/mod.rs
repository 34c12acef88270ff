// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Digital filters for spectral shaping
//!
//! Filtering is split into two explicit steps:
//!
//! 1. **Design**: [`design_butter_lowpass`] turns an order and a normalized
//!    cutoff into a [`TransferFunction`]. It is pure, so results can be shared
//!    through a [`CoefficientCache`].
//! 2. **Application**: [`IirFilter`] runs a transfer function over samples as
//!    a causal direct-form recursive filter. It keeps its state between calls,
//!    so a signal can be fed in chunks.
//!
//! [`ButterLowpassFilter`] bundles both steps behind the [`Filter`] trait.
//!
//! # Examples
//!
//! ```
//! use codex_audio::filter::{Filter, ButterLowpassFilter};
//!
//! let filter = ButterLowpassFilter::new(900.0, 8000, 4).unwrap();
//! let input = vec![1.0, 0.5, -0.3, 0.8, -0.2];
//! let output = filter.apply(&input);
//! assert_eq!(output.len(), input.len());
//! ```

pub mod butter_lowpass;
pub mod iir;
pub mod shaper;

#[cfg(test)]
mod butter_lowpass_test;

pub use butter_lowpass::{design_butter_lowpass, ButterLowpassFilter, CoefficientCache};
pub use iir::{IirFilter, TransferFunction};
pub use shaper::{clamp_cutoff, shape_noise, SHAPER_ORDER};

/// Trait for implementing digital filters
///
/// Implementations are stateless from the caller's point of view: every call
/// to [`Filter::apply`] starts from a zeroed filter state.
pub trait Filter: Send + Sync {
    /// Apply the filter to a signal and return the filtered signal
    fn apply(&self, signal: &[f32]) -> Vec<f32>;
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types for the rendering pipeline

use thiserror::Error;

/// Errors that can occur while rendering or persisting audio
///
/// Malformed signal *values* never produce an error: they are clamped or
/// defaulted by the normalizer. These variants cover structural problems only.
#[derive(Error, Debug)]
pub enum SonifyError {
    /// Duration or sample rate outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Filter coefficients could not be designed, or filtering diverged
    #[error("Filter design failed: {0}")]
    FilterDesign(String),

    /// Two buffers with different shapes were combined
    #[error("Shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: String, right: String },

    /// Underlying I/O failure while persisting output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV container encoding failure
    #[error("WAV encoding error: {0}")]
    Wav(String),
}

impl From<hound::Error> for SonifyError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => SonifyError::Io(io),
            other => SonifyError::Wav(other.to_string()),
        }
    }
}

impl From<tempfile::PersistError> for SonifyError {
    fn from(err: tempfile::PersistError) -> Self {
        SonifyError::Io(err.error)
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SonifyError>;

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Codex audio library
//!
//! Turns hourly environmental readings (cloud cover, wind, sun altitude,
//! moon phase) into an ambient soundscape. Each reading renders one block of
//! mono audio; a day of readings renders into one continuous recording.

pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod signal;
pub mod synthesis;

pub use error::{Result, SonifyError};
pub use render::{compose_day, render_block, AudioBlock, DayComposer, RenderConfig};
pub use signal::{HourlySignal, SignalBundle, SignalReading};

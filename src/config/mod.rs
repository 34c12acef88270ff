// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the renderer
//!
//! Settings are stored in a YAML file with two sections:
//! - `render`: block duration, sample rate and optional noise seed
//! - `output`: WAV sample encoding and parallel rendering
//!
//! ## Usage
//!
//! ```no_run
//! use codex_audio::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("codex_audio.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(2.0),   // Duration
//!     Some(8000),  // Sample rate
//!     Some(42),    // Seed
//!     None,        // Sample format
//! );
//!
//! let render_config = config.render_config().unwrap();
//! ```

pub mod output;
pub mod render;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub use output::OutputSection;
pub use render::RenderSection;

use crate::render::{DayComposer, RenderConfig, WavSampleFormat};

/// Root configuration structure.
///
/// Every section falls back to its defaults when missing from the file, so
/// an empty YAML document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Block duration, sample rate and seed
    #[serde(default)]
    pub render: RenderSection,

    /// Output encoding and scheduling
    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    /// Load configuration from a file
    ///
    /// When the file does not exist, the default configuration is written
    /// there and returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        let config: Config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML configuration from {:?}", path))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {:?}", path))?;

        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory at {:?}", parent)
                })?;
            }
        }

        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create config file at {:?}", path))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path))?;

        Ok(())
    }

    /// Check the values that would make rendering fail
    pub fn validate(&self) -> Result<()> {
        self.render_config()?;
        Ok(())
    }

    /// Build the validated per-call render settings
    pub fn render_config(&self) -> Result<RenderConfig> {
        RenderConfig::new(self.render.duration_s, self.render.sample_rate)
            .context("Invalid render section")
    }

    /// Build a composer configured from every section
    pub fn composer(&self) -> Result<DayComposer> {
        Ok(DayComposer::new(self.render_config()?)
            .with_optional_seed(self.render.seed)
            .with_parallel(self.output.parallel)
            .with_format(self.output.sample_format))
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only arguments that are provided override the loaded values.
    pub fn apply_args(
        &mut self,
        duration_s: Option<f64>,
        sample_rate: Option<u32>,
        seed: Option<u64>,
        sample_format: Option<WavSampleFormat>,
    ) {
        if let Some(duration_s) = duration_s {
            debug!("Overriding duration from command line: {}", duration_s);
            self.render.duration_s = duration_s;
        }
        if let Some(sample_rate) = sample_rate {
            debug!("Overriding sample rate from command line: {}", sample_rate);
            self.render.sample_rate = sample_rate;
        }
        if let Some(seed) = seed {
            debug!("Overriding seed from command line: {}", seed);
            self.render.seed = Some(seed);
        }
        if let Some(format) = sample_format {
            debug!("Overriding sample format from command line: {:?}", format);
            self.output.sample_format = format;
        }
    }
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the codex-audio project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Mono WAV persistence
//!
//! Output is written to a temporary file next to the destination and moved
//! into place only after the WAV header has been finalized, so a failed write
//! never leaves a truncated file at the destination path.

use super::AudioBlock;
use crate::error::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

/// Sample encoding inside the WAV container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WavSampleFormat {
    /// 16-bit signed PCM
    #[default]
    Int16,
    /// 32-bit IEEE float
    Float32,
}

impl WavSampleFormat {
    fn spec(self, sample_rate: u32) -> WavSpec {
        match self {
            WavSampleFormat::Int16 => WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            },
            WavSampleFormat::Float32 => WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
                sample_format: SampleFormat::Float,
            },
        }
    }
}

/// Write `block` as a mono WAV file at its own sample rate
///
/// Parent directories are created when missing. An empty block produces a
/// valid file with zero frames.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    block: &AudioBlock,
    format: WavSampleFormat,
) -> Result<()> {
    let path = path.as_ref();

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        debug!("Creating parent directory: {:?}", parent);
        fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = WavWriter::new(
            BufWriter::new(temp.as_file()),
            format.spec(block.sample_rate()),
        )?;

        match format {
            WavSampleFormat::Int16 => {
                for &sample in block.samples() {
                    let value = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
                    writer.write_sample(value)?;
                }
            }
            WavSampleFormat::Float32 => {
                for &sample in block.samples() {
                    writer.write_sample(sample)?;
                }
            }
        }

        writer.finalize()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    info!(
        "Wrote {} samples ({:.1}s at {} Hz) to {}",
        block.len(),
        block.duration_s(),
        block.sample_rate(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_int16_roundtrip_header_and_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("block.wav");
        let block = AudioBlock::new(vec![0.0, 0.5, -0.5, 0.98], 8000);

        write_wav(&path, &block, WavSampleFormat::Int16).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16383, -16383, 32111]);
    }

    #[test]
    fn test_float32_preserves_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("block.wav");
        let block = AudioBlock::new(vec![0.125, -0.25, 0.75], 48000);

        write_wav(&path, &block, WavSampleFormat::Float32).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_format, SampleFormat::Float);
        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, block.samples());
    }

    #[test]
    fn test_empty_block_is_a_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        let block = AudioBlock::empty(48000);
        write_wav(&path, &block, WavSampleFormat::Int16).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration(), 0);
        assert_eq!(reader.spec().sample_rate, 48000);
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let block = AudioBlock::new(vec![0.1; 100], 8000);
        write_wav(&path, &block, WavSampleFormat::Int16).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}

//! WAV encoding result type.

use std::io;

use super::format::WavFormat;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// An encoded WAV file and its identifying metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono 16-bit samples.
    ///
    /// Fails only if the PCM payload exceeds the 4 GiB RIFF size limit.
    pub fn from_pcm16(samples: &[i16], sample_rate: u32) -> io::Result<Self> {
        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

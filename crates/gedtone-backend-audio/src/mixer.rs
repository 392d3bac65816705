//! Segment assembly, peak normalization, and 16-bit conversion.

use tracing::debug;

use crate::error::AudioResult;
use crate::sequencer::Segment;
use crate::wav::WavResult;

/// Largest positive 16-bit PCM sample value.
pub const PCM16_MAX: f64 = i16::MAX as f64;

/// Normalized mono 16-bit PCM audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    /// PCM samples.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Encodes the buffer as a WAV file.
    pub fn to_wav(&self) -> AudioResult<WavResult> {
        Ok(WavResult::from_pcm16(&self.samples, self.sample_rate)?)
    }
}

/// Concatenates segment samples in order.
pub fn concatenate(segments: &[Segment]) -> Vec<f64> {
    let total: usize = segments.iter().map(Segment::len).sum();
    let mut out = Vec::with_capacity(total);
    for segment in segments {
        out.extend_from_slice(&segment.samples);
    }
    out
}

/// Scales samples so the largest magnitude equals `target_peak`.
///
/// Silent input is left unchanged. Samples are divided by the peak before
/// scaling so a subnormal peak cannot overflow the gain.
///
/// # Returns
/// The nominal gain `target_peak / peak` (1.0 for silent input).
pub fn normalize_to_peak(samples: &mut [f64], target_peak: f64) -> f64 {
    let current_peak = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample = *sample / current_peak * target_peak;
        }
        target_peak / current_peak
    } else {
        1.0
    }
}

/// Rounds samples already scaled to PCM range, clamping to i16.
pub fn to_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| s.round().clamp(i16::MIN as f64, PCM16_MAX) as i16)
        .collect()
}

/// Concatenates segments and normalizes them to full 16-bit scale.
///
/// # Returns
/// `None` when there is nothing to encode; otherwise a buffer whose peak is
/// 32767 (or all zeros when the input was silent).
pub fn assemble(segments: &[Segment], sample_rate: u32) -> Option<AudioBuffer> {
    let mut samples = concatenate(segments);
    if samples.is_empty() {
        debug!("no samples to assemble");
        return None;
    }

    let gain = normalize_to_peak(&mut samples, PCM16_MAX);
    debug!(samples = samples.len(), gain, "normalized audio");

    Some(AudioBuffer {
        samples: to_pcm16(&samples),
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gedtone_spec::Month;
    use pretty_assertions::assert_eq;

    fn segment(samples: Vec<f64>) -> Segment {
        Segment {
            month: Month::Jan,
            repeats: 1,
            samples,
        }
    }

    #[test]
    fn test_concatenate_preserves_order() {
        let segments = vec![segment(vec![0.1, 0.2]), segment(vec![]), segment(vec![0.3])];
        assert_eq!(concatenate(&segments), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_normalize_to_peak() {
        let mut samples = vec![0.5, -0.25, 0.1];
        let gain = normalize_to_peak(&mut samples, 1.0);
        assert_eq!(gain, 2.0);
        assert_eq!(samples, vec![1.0, -0.5, 0.2]);
    }

    #[test]
    fn test_normalize_silent_audio() {
        let mut samples = vec![0.0, 0.0, 0.0];
        let gain = normalize_to_peak(&mut samples, PCM16_MAX);
        assert_eq!(gain, 1.0);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_assemble_full_scale() {
        let segments = vec![segment(vec![0.0, 0.25, -0.5]), segment(vec![0.1])];
        let buffer = assemble(&segments, 44100).unwrap();
        assert_eq!(buffer.samples, vec![0, 16384, -32767, 6553]);
        assert_eq!(buffer.peak(), 32767);
    }

    #[test]
    fn test_assemble_positive_peak() {
        let buffer = assemble(&[segment(vec![0.3, -0.1])], 8000).unwrap();
        assert_eq!(buffer.samples[0], 32767);
        assert_eq!(buffer.sample_rate, 8000);
    }

    #[test]
    fn test_assemble_subnormal_peak() {
        let tiny = f64::MIN_POSITIVE / 1024.0;
        assert!(tiny > 0.0 && !f64::is_normal(tiny));
        let buffer = assemble(&[segment(vec![0.0, tiny, -tiny, tiny / 2.0])], 44100).unwrap();
        assert_eq!(buffer.samples, vec![0, 32767, -32767, 16384]);
        assert_eq!(buffer.peak(), 32767);
    }

    #[test]
    fn test_assemble_silent_stays_zero() {
        let buffer = assemble(&[segment(vec![0.0; 16])], 44100).unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.peak(), 0);
    }

    #[test]
    fn test_assemble_empty_is_none() {
        assert!(assemble(&[], 44100).is_none());
        assert!(assemble(&[segment(vec![])], 44100).is_none());
    }

    #[test]
    fn test_to_pcm16_clamps() {
        assert_eq!(
            to_pcm16(&[40000.0, -40000.0, 1.4, -1.6]),
            vec![32767, -32768, 1, -2]
        );
    }

    #[test]
    fn test_duration_seconds() {
        let buffer = AudioBuffer {
            samples: vec![0; 22050],
            sample_rate: 44100,
        };
        assert_eq!(buffer.duration_seconds(), 0.5);
    }
}

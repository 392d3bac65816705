//! Synthesis parameters and play order policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SpecError, ValidationResult};
use crate::validation::validate_params;

/// Default note length in seconds.
pub const DEFAULT_NOTE_DURATION: f64 = 0.1;
/// Default peak amplitude before normalization.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;
/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default silence after each note in seconds.
pub const DEFAULT_SILENCE_SECONDS: f64 = 0.05;
/// Fade-in/fade-out length applied to each tone, in seconds.
pub const FADE_SECONDS: f64 = 0.01;

/// Parameters controlling tone synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SynthesisParams {
    /// Length of each note in seconds.
    pub note_duration: f64,
    /// Tone amplitude (0.0 exclusive to 1.0 inclusive).
    pub amplitude: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Silence following each note, in seconds.
    pub silence_seconds: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            note_duration: DEFAULT_NOTE_DURATION,
            amplitude: DEFAULT_AMPLITUDE,
            sample_rate: DEFAULT_SAMPLE_RATE,
            silence_seconds: DEFAULT_SILENCE_SECONDS,
        }
    }
}

impl SynthesisParams {
    /// Creates parameters with the given note duration and amplitude.
    pub fn new(note_duration: f64, amplitude: f64) -> Self {
        Self {
            note_duration,
            amplitude,
            ..Self::default()
        }
    }

    /// Sets the note duration.
    pub fn with_note_duration(mut self, seconds: f64) -> Self {
        self.note_duration = seconds;
        self
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Parses parameters from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(SpecError::from)
    }

    /// Serializes parameters as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        serde_json::to_string_pretty(self).map_err(SpecError::from)
    }

    /// Validates the parameters.
    pub fn validate(&self) -> ValidationResult {
        validate_params(self)
    }

    /// Number of samples in one note: `floor(sample_rate * note_duration)`.
    pub fn note_samples(&self) -> usize {
        (self.sample_rate as f64 * self.note_duration).floor() as usize
    }

    /// Number of samples in the inter-note silence.
    pub fn silence_samples(&self) -> usize {
        (self.sample_rate as f64 * self.silence_seconds).round() as usize
    }

    /// Number of samples in each fade ramp.
    pub fn fade_samples(&self) -> usize {
        (self.sample_rate as f64 * FADE_SECONDS).floor() as usize
    }

    /// Samples in one note plus its silence.
    pub fn unit_samples(&self) -> usize {
        self.note_samples() + self.silence_samples()
    }
}

/// Order in which extracted months are played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayPolicy {
    /// Calendar order, all occurrences of a month adjacent.
    #[default]
    Chronological,
    /// Random permutation of the extracted months.
    Shuffled,
}

impl PlayPolicy {
    /// Returns the policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayPolicy::Chronological => "chronological",
            PlayPolicy::Shuffled => "shuffled",
        }
    }
}

impl fmt::Display for PlayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayPolicy {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chronological" => Ok(PlayPolicy::Chronological),
            "shuffled" | "shuffle" => Ok(PlayPolicy::Shuffled),
            _ => Err(SpecError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let params = SynthesisParams::default();
        assert_eq!(params.note_duration, 0.1);
        assert_eq!(params.amplitude, 0.5);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.silence_seconds, 0.05);
    }

    #[test]
    fn test_sample_counts() {
        let params = SynthesisParams::default();
        assert_eq!(params.note_samples(), 4410);
        assert_eq!(params.silence_samples(), 2205);
        assert_eq!(params.fade_samples(), 441);
        assert_eq!(params.unit_samples(), 6615);
    }

    #[test]
    fn test_from_json_partial() {
        let params = SynthesisParams::from_json(r#"{"note_duration": 0.25}"#).unwrap();
        assert_eq!(params.note_duration, 0.25);
        assert_eq!(params.amplitude, DEFAULT_AMPLITUDE);
        assert_eq!(params.sample_rate, DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = SynthesisParams::from_json(r#"{"tempo": 120}"#).unwrap_err();
        assert!(err.to_string().contains("tempo"));
    }

    #[test]
    fn test_json_round_trip() {
        let params = SynthesisParams::new(0.3, 0.8);
        let json = params.to_json_pretty().unwrap();
        assert_eq!(SynthesisParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn test_validate_reports_errors() {
        let result = SynthesisParams::new(0.1, 0.0).validate();
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].path.as_deref(), Some("amplitude"));
        assert!(SynthesisParams::default().validate().is_ok());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "chronological".parse::<PlayPolicy>().unwrap(),
            PlayPolicy::Chronological
        );
        assert_eq!("Shuffled".parse::<PlayPolicy>().unwrap(), PlayPolicy::Shuffled);
        assert_eq!("shuffle".parse::<PlayPolicy>().unwrap(), PlayPolicy::Shuffled);
        assert!("random".parse::<PlayPolicy>().is_err());
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(
            serde_json::to_string(&PlayPolicy::Shuffled).unwrap(),
            "\"shuffled\""
        );
        assert_eq!(PlayPolicy::default(), PlayPolicy::Chronological);
    }
}

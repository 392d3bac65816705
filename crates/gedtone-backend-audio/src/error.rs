//! Error types for the audio backend.

use gedtone_spec::SpecError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
///
/// Empty input is never an error: the pipeline reports it as a result
/// without audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Synthesis parameters failed validation.
    #[error("invalid synthesis parameters: {0}")]
    InvalidParams(#[from] SpecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParams(_) => "AUDIO_001",
            AudioError::Io(_) => "AUDIO_002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gedtone_spec::SynthesisParams;

    #[test]
    fn test_invalid_params_message() {
        let params = SynthesisParams::default().with_amplitude(3.0);
        let spec_err = params.validate().into_result().unwrap_err();
        let err = AudioError::from(spec_err);
        assert_eq!(err.code(), "AUDIO_001");
        assert!(err.to_string().contains("amplitude"));
    }
}

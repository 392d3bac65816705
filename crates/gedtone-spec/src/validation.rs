//! Synthesis parameter validation.
//!
//! Hard errors reject values that cannot describe a tone at all. Values that
//! are legal but outside the useful range only produce warnings; a note so
//! short that it yields zero samples still renders (as silence).

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::params::SynthesisParams;

/// Recommended note duration range in seconds.
pub const RECOMMENDED_NOTE_DURATION: (f64, f64) = (0.05, 0.5);
/// Recommended amplitude range.
pub const RECOMMENDED_AMPLITUDE: (f64, f64) = (0.1, 1.0);
/// Upper bound on note duration; longer notes would allocate unbounded buffers.
pub const MAX_NOTE_DURATION: f64 = 10.0;
/// Upper bound on sample rate.
pub const MAX_SAMPLE_RATE: u32 = 192_000;
/// Upper bound on inter-note silence in seconds.
pub const MAX_SILENCE_SECONDS: f64 = 10.0;

/// Validates synthesis parameters.
pub fn validate_params(params: &SynthesisParams) -> ValidationResult {
    let mut result = ValidationResult::success();

    let duration = params.note_duration;
    if !duration.is_finite() || duration <= 0.0 || duration > MAX_NOTE_DURATION {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidNoteDuration,
            format!(
                "note duration must be in (0, {}] seconds, got {}",
                MAX_NOTE_DURATION, duration
            ),
            "note_duration",
        ));
    } else if duration < RECOMMENDED_NOTE_DURATION.0 || duration > RECOMMENDED_NOTE_DURATION.1 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoteDurationOutOfRange,
            format!(
                "note duration {} s is outside the recommended {}-{} s",
                duration, RECOMMENDED_NOTE_DURATION.0, RECOMMENDED_NOTE_DURATION.1
            ),
            "note_duration",
        ));
    }

    let amplitude = params.amplitude;
    if !amplitude.is_finite() || amplitude <= 0.0 || amplitude > 1.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!("amplitude must be in (0, 1], got {}", amplitude),
            "amplitude",
        ));
    } else if amplitude < RECOMMENDED_AMPLITUDE.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AmplitudeOutOfRange,
            format!(
                "amplitude {} is below the recommended minimum {}",
                amplitude, RECOMMENDED_AMPLITUDE.0
            ),
            "amplitude",
        ));
    }

    if params.sample_rate == 0 || params.sample_rate > MAX_SAMPLE_RATE {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample rate must be in 1..={} Hz, got {}",
                MAX_SAMPLE_RATE, params.sample_rate
            ),
            "sample_rate",
        ));
    }

    let silence = params.silence_seconds;
    if !silence.is_finite() || silence < 0.0 || silence > MAX_SILENCE_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSilence,
            format!(
                "silence must be in [0, {}] seconds, got {}",
                MAX_SILENCE_SECONDS, silence
            ),
            "silence_seconds",
        ));
    }

    if result.is_ok() {
        let note = params.note_samples();
        let fade = params.fade_samples();
        if note <= 2 * fade {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::FadeSkipped,
                format!(
                    "notes of {} samples are too short for {}-sample fades; clicks may be audible",
                    note, fade
                ),
                "note_duration",
            ));
        }
    }

    result
}

//! Main entry point for turning a genealogy file into audio.
//!
//! Runs extraction, sequencing and assembly in one synchronous pass. Each call
//! owns all of its state, including the RNG used for shuffled order.

use gedtone_spec::{
    extract_months, extract_months_from_bytes, MonthCounts, MonthSequence, PlayPolicy,
    SynthesisParams, ValidationWarning,
};
use tracing::{debug, info};

use crate::error::AudioResult;
use crate::mixer::assemble;
use crate::rng::{create_rng, random_seed};
use crate::sequencer::sequence;
use crate::wav::WavResult;

/// Parameters for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateRequest {
    /// Synthesis parameters.
    pub params: SynthesisParams,
    /// Play order.
    pub policy: PlayPolicy,
    /// Seed for shuffled order; a fresh seed is drawn when absent.
    pub seed: Option<u32>,
}

impl GenerateRequest {
    /// Creates a request.
    pub fn new(params: SynthesisParams, policy: PlayPolicy) -> Self {
        Self {
            params,
            policy,
            seed: None,
        }
    }

    /// Fixes the shuffle seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of one render.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Months in source order.
    pub months: MonthSequence,
    /// Per-month counts, independent of play order.
    pub counts: MonthCounts,
    /// Number of extracted dates.
    pub total: usize,
    /// Encoded audio; `None` when no recognizable dates were found.
    pub wav: Option<WavResult>,
    /// Play order used.
    pub policy: PlayPolicy,
    /// Seed the shuffle RNG was created from.
    pub seed: u32,
    /// Non-fatal parameter warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl GenerateResult {
    /// Whether audio was produced.
    pub fn has_audio(&self) -> bool {
        self.wav.is_some()
    }
}

/// Generates audio from decoded file text.
pub fn generate(text: &str, request: &GenerateRequest) -> AudioResult<GenerateResult> {
    let months = extract_months(text);
    generate_from_months(months, request)
}

/// Generates audio from raw file bytes, decoding them permissively.
pub fn generate_from_bytes(bytes: &[u8], request: &GenerateRequest) -> AudioResult<GenerateResult> {
    let months = extract_months_from_bytes(bytes);
    generate_from_months(months, request)
}

/// Generates audio from an already extracted month sequence.
pub fn generate_from_months(
    months: MonthSequence,
    request: &GenerateRequest,
) -> AudioResult<GenerateResult> {
    let warnings = request.params.validate().into_result()?;

    let counts = months.counts();
    let total = months.len();
    let seed = request.seed.unwrap_or_else(random_seed);
    let mut rng = create_rng(seed);

    let segments = sequence(&months, &counts, &request.params, request.policy, &mut rng);
    let wav = match assemble(&segments, request.params.sample_rate) {
        Some(buffer) => {
            debug!(
                samples = buffer.len(),
                seconds = buffer.duration_seconds(),
                "assembled audio"
            );
            Some(buffer.to_wav()?)
        }
        None => None,
    };

    info!(
        total,
        policy = %request.policy,
        seed,
        has_audio = wav.is_some(),
        "render complete"
    );

    Ok(GenerateResult {
        months,
        counts,
        total,
        wav,
        policy: request.policy,
        seed,
        warnings,
    })
}

//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `render`, `stats` and `scale`, so
//! scripts can consume results without parsing coloured text.

use gedtone_spec::{ExtractStats, Month, MonthCounts, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. Parameter validation errors pass through their own
/// codes (E001..E004).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file could not be parsed
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Unknown play policy
    pub const UNKNOWN_POLICY: &str = "CLI_003";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// No recognizable dates in the input
    pub const NO_DATES: &str = "CLI_W001";
    /// Dates were found but the parameters yield zero samples
    pub const NO_SAMPLES: &str = "CLI_W002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending parameter field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the source file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001", "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Offending parameter field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

/// One month's row in count and scale output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthCountJson {
    /// Month number (1-12)
    pub month: u8,
    /// Three-letter abbreviation
    pub abbrev: String,
    /// Note name
    pub note: String,
    /// Tone frequency in Hz
    pub frequency_hz: f64,
    /// Number of extracted dates in this month
    pub count: usize,
}

impl MonthCountJson {
    /// Builds a row for `month` with the given count.
    pub fn new(month: Month, count: usize) -> Self {
        Self {
            month: month.number(),
            abbrev: month.abbrev().to_string(),
            note: month.note_name().to_string(),
            frequency_hz: month.frequency(),
            count,
        }
    }
}

/// All twelve months with their counts, in calendar order.
pub fn counts_to_json(counts: &MonthCounts) -> Vec<MonthCountJson> {
    counts
        .iter()
        .map(|(month, count)| MonthCountJson::new(month, count))
        .collect()
}

/// Line diagnostics from extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineStatsJson {
    /// Lines scanned
    pub lines: usize,
    /// Lines carrying the DATE tag
    pub date_lines: usize,
    /// DATE lines that yielded a month
    pub matched_date_lines: usize,
    /// DATE lines without a month abbreviation
    pub unmatched_date_lines: usize,
}

impl From<&ExtractStats> for LineStatsJson {
    fn from(stats: &ExtractStats) -> Self {
        Self {
            lines: stats.lines,
            date_lines: stats.date_lines,
            matched_date_lines: stats.matched_date_lines(),
            unmatched_date_lines: stats.unmatched_date_lines,
        }
    }
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether the command succeeded (true also when no dates were found)
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings encountered
    pub warnings: Vec<JsonWarning>,
    /// BLAKE3 hash of the input file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Render details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
}

/// Render result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Number of extracted dates
    pub total: usize,
    /// Per-month counts
    pub counts: Vec<MonthCountJson>,
    /// Play order used
    pub policy: String,
    /// Shuffle seed used
    pub seed: u32,
    /// Output WAV path (absent when no audio was produced)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Number of PCM samples
    pub num_samples: usize,
    /// Audio duration in seconds
    pub duration_seconds: f64,
    /// Wall-clock render time
    pub duration_ms: u64,
}

impl RenderOutput {
    /// Creates a successful render output.
    pub fn success(result: RenderResult, source_hash: String, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            source_hash: Some(source_hash),
            result: Some(result),
        }
    }

    /// Creates a failed render output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            source_hash,
            result: None,
        }
    }
}

/// JSON output for the `stats` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Statistics (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<StatsResult>,
}

/// Extraction statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResult {
    /// Input file path
    pub input: String,
    /// BLAKE3 hash of the input file
    pub source_hash: String,
    /// Number of extracted dates
    pub total: usize,
    /// Per-month counts
    pub counts: Vec<MonthCountJson>,
    /// Line diagnostics
    pub lines: LineStatsJson,
}

impl StatsOutput {
    /// Creates a successful stats output.
    pub fn success(result: StatsResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed stats output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `scale` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleOutput {
    /// Month rows (count is always zero)
    pub months: Vec<MonthCountJson>,
}

/// Converts an input error to a JSON error.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    match err {
        InputError::FileRead { path, source } => JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read file '{}': {}", path.display(), source),
        )
        .with_file(path.display().to_string()),
        InputError::ConfigParse { path, message } => JsonError::new(
            error_codes::CONFIG_PARSE,
            format!("Invalid config: {}", message),
        )
        .with_file(path.display().to_string()),
    }
}

/// Converts a parameter validation error to a JSON error.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    JsonError {
        code: err.code.to_string(),
        message: err.message.clone(),
        path: err.path.clone(),
        file: None,
    }
}

/// Converts a parameter validation warning to a JSON warning.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

/// Serializes output for printing.
///
/// The output types contain only strings, numbers and vectors, so
/// serialization cannot fail.
pub fn to_pretty<T: Serialize>(output: &T) -> String {
    serde_json::to_string_pretty(output).expect("CLI output serialization should not fail")
}

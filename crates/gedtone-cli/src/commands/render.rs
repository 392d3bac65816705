//! Render command implementation
//!
//! Extracts months from a genealogy file, renders them to a WAV file and
//! prints the per-month statistics.

use anyhow::Result;
use colored::Colorize;
use gedtone_backend_audio::{generate_from_bytes, AudioError, GenerateRequest, GenerateResult};
use gedtone_spec::{PlayPolicy, SpecError, SynthesisParams, ValidationError, ValidationWarning};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

use super::display;
use super::json_output::{
    counts_to_json, error_codes, input_error_to_json, to_pretty, validation_error_to_json,
    validation_warning_to_json, warning_codes, JsonError, JsonWarning, RenderOutput, RenderResult,
};
use crate::input::{default_output_path, load_input, load_params, InputError, LoadedInput};

/// Exit code for bad input files, config or flags.
pub const EXIT_INPUT_ERROR: u8 = 1;

/// Exit code for synthesis or output write failures.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// Options for one render invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions<'a> {
    /// Path to the genealogy file
    pub input: &'a str,
    /// Output WAV path (default: `<input>.wav`)
    pub output: Option<&'a str>,
    /// Path to a JSON parameter file
    pub config: Option<&'a str>,
    /// Note duration override in seconds
    pub note_duration: Option<f64>,
    /// Amplitude override
    pub amplitude: Option<f64>,
    /// Play policy name
    pub policy: &'a str,
    /// Shuffle seed
    pub seed: Option<u32>,
}

/// A completed render.
#[derive(Debug)]
struct Rendered {
    input: LoadedInput,
    result: GenerateResult,
    output: Option<PathBuf>,
    duration_ms: u64,
}

/// Ways a render can fail.
#[derive(Debug)]
enum RenderError {
    Input(InputError),
    Policy(SpecError),
    InvalidParams(Vec<ValidationError>),
    Generate(AudioError),
    Write { path: PathBuf, source: std::io::Error },
}

impl RenderError {
    fn exit_code(&self) -> ExitCode {
        match self {
            RenderError::Input(_) | RenderError::Policy(_) | RenderError::InvalidParams(_) => {
                ExitCode::from(EXIT_INPUT_ERROR)
            }
            RenderError::Generate(_) | RenderError::Write { .. } => {
                ExitCode::from(EXIT_GENERATION_ERROR)
            }
        }
    }

    fn to_json(&self) -> Vec<JsonError> {
        match self {
            RenderError::Input(e) => vec![input_error_to_json(e)],
            RenderError::Policy(e) => vec![JsonError::new(
                error_codes::UNKNOWN_POLICY,
                e.to_string(),
            )],
            RenderError::InvalidParams(errors) => {
                errors.iter().map(validation_error_to_json).collect()
            }
            RenderError::Generate(e) => vec![JsonError::new(
                error_codes::GENERATION_ERROR,
                format!("[{}] {}", e.code(), e),
            )],
            RenderError::Write { path, source } => vec![JsonError::new(
                error_codes::FILE_WRITE,
                format!("Failed to write '{}': {}", path.display(), source),
            )
            .with_file(path.display().to_string())],
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Input(e) => write!(f, "{}", e),
            RenderError::Policy(e) => write!(f, "{}", e),
            RenderError::InvalidParams(errors) => {
                write!(f, "invalid synthesis parameters ({} error(s))", errors.len())
            }
            RenderError::Generate(e) => write!(f, "generation failed: {}", e),
            RenderError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Input(e) => std::error::Error::source(e),
            RenderError::Policy(e) => std::error::Error::source(e),
            RenderError::Generate(e) => std::error::Error::source(e),
            RenderError::InvalidParams(_) | RenderError::Write { .. } => None,
        }
    }
}

/// Builds synthesis parameters from an optional config file plus flag overrides.
///
/// Flags win over the config file; fields set by neither keep their defaults.
pub fn resolve_params(
    config: Option<&Path>,
    note_duration: Option<f64>,
    amplitude: Option<f64>,
) -> Result<SynthesisParams, InputError> {
    let mut params = match config {
        Some(path) => load_params(path)?,
        None => SynthesisParams::default(),
    };
    if let Some(seconds) = note_duration {
        params = params.with_note_duration(seconds);
    }
    if let Some(amplitude) = amplitude {
        params = params.with_amplitude(amplitude);
    }
    Ok(params)
}

/// Warning for a render that produced no audio, if it did not.
///
/// Distinguishes a file without dates from parameters too small to yield
/// any samples (for example a sample rate of a few Hz).
pub fn no_audio_warning(result: &GenerateResult) -> Option<JsonWarning> {
    if result.has_audio() {
        None
    } else if result.total == 0 {
        Some(JsonWarning::new(
            warning_codes::NO_DATES,
            "No recognizable dates found in the file",
        ))
    } else {
        Some(JsonWarning::new(
            warning_codes::NO_SAMPLES,
            format!(
                "Found {} date(s) but the parameters produced no audio samples",
                result.total
            ),
        ))
    }
}

/// Runs the pipeline and writes the WAV file when there is audio.
fn render(options: &RenderOptions<'_>) -> std::result::Result<Rendered, RenderError> {
    let start = Instant::now();

    let input = load_input(Path::new(options.input)).map_err(RenderError::Input)?;
    let params = resolve_params(
        options.config.map(Path::new),
        options.note_duration,
        options.amplitude,
    )
    .map_err(RenderError::Input)?;
    let policy: PlayPolicy = options.policy.parse().map_err(RenderError::Policy)?;

    let validation = params.validate();
    if !validation.is_ok() {
        return Err(RenderError::InvalidParams(validation.errors));
    }

    let mut request = GenerateRequest::new(params, policy);
    request.seed = options.seed;
    let result = generate_from_bytes(&input.bytes, &request).map_err(RenderError::Generate)?;

    let output = match &result.wav {
        Some(wav) => {
            let path = options
                .output
                .map(PathBuf::from)
                .unwrap_or_else(|| default_output_path(&input.path));
            std::fs::write(&path, &wav.wav_data).map_err(|e| RenderError::Write {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path.display(), bytes = wav.wav_data.len(), "wrote wav");
            Some(path)
        }
        None => None,
    };

    Ok(Rendered {
        input,
        result,
        output,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Run the render command
///
/// # Arguments
/// * `options` - Input, output, parameter and policy selection
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success or when no dates were found, 1 for input or
/// parameter errors, 2 when synthesis or writing the output failed
pub fn run(options: &RenderOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run render with human-readable (colored) output
fn run_human(options: &RenderOptions<'_>) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), options.input);

    let rendered = match render(options) {
        Ok(rendered) => rendered,
        Err(RenderError::InvalidParams(errors)) => {
            print_param_errors(&errors);
            return Ok(ExitCode::from(EXIT_INPUT_ERROR));
        }
        Err(e @ (RenderError::Input(_) | RenderError::Policy(_))) => {
            return Err(anyhow::Error::new(e));
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            return Ok(e.exit_code());
        }
    };

    let Rendered {
        result,
        output,
        duration_ms,
        ..
    } = rendered;

    print_param_warnings(&result.warnings);

    let Some(wav) = &result.wav else {
        if let Some(warning) = no_audio_warning(&result) {
            println!("\n{} {}.", "WARNING".yellow().bold(), warning.message);
        }
        return Ok(ExitCode::SUCCESS);
    };

    println!(
        "\n{} Found {} date(s) in total.",
        "SUCCESS".green().bold(),
        result.total
    );
    display::print_chart(&result.counts);

    println!();
    if let Some(path) = &output {
        println!("{} {}", "Output:".dimmed(), path.display());
    }
    println!(
        "{} {:.2}s, {} samples @ {} Hz",
        "Audio:".dimmed(),
        wav.duration_seconds(),
        wav.num_samples,
        wav.sample_rate
    );
    match result.policy {
        PlayPolicy::Chronological => println!("{} {}", "Order:".dimmed(), result.policy),
        PlayPolicy::Shuffled => println!(
            "{} {} (seed {})",
            "Order:".dimmed(),
            result.policy,
            result.seed
        ),
    }
    println!("{} {}", "PCM hash:".dimmed(), &wav.pcm_hash[..16]);

    display::print_legend();
    println!("\n{} ({}ms)", "Done".green().bold(), duration_ms);

    Ok(ExitCode::SUCCESS)
}

/// Run render with machine-readable JSON output
fn run_json(options: &RenderOptions<'_>) -> Result<ExitCode> {
    let rendered = match render(options) {
        Ok(rendered) => rendered,
        Err(e) => {
            let output = RenderOutput::failure(e.to_json(), Vec::new(), None);
            println!("{}", to_pretty(&output));
            return Ok(e.exit_code());
        }
    };

    let mut warnings: Vec<JsonWarning> = rendered
        .result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();
    warnings.extend(no_audio_warning(&rendered.result));

    let result = &rendered.result;
    let wav = result.wav.as_ref();
    let render_result = RenderResult {
        total: result.total,
        counts: counts_to_json(&result.counts),
        policy: result.policy.to_string(),
        seed: result.seed,
        output: rendered.output.as_ref().map(|p| p.display().to_string()),
        pcm_hash: wav.map(|w| w.pcm_hash.clone()),
        num_samples: wav.map_or(0, |w| w.num_samples),
        duration_seconds: wav.map_or(0.0, |w| w.duration_seconds()),
        duration_ms: rendered.duration_ms,
    };

    let output = RenderOutput::success(
        render_result,
        rendered.input.source_hash.clone(),
        warnings,
    );
    println!("{}", to_pretty(&output));
    Ok(ExitCode::SUCCESS)
}

fn print_param_errors(errors: &[ValidationError]) {
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
    println!(
        "\n{} Parameters have {} error(s)",
        "FAILED".red().bold(),
        errors.len()
    );
}

fn print_param_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in warnings {
        let path_info = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            path_info.dimmed(),
            warning.message
        );
    }
}

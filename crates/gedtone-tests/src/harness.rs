//! Test harness utilities for running CLI commands and validating outputs.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use gedtone_backend_audio::wav::compute_pcm_hash;
use tempfile::TempDir;

/// Result of running the gedtone CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command exited with `code`.
    pub fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.exit_code, code,
            "Unexpected exit code.\nstdout: {}\nstderr: {}",
            self.stdout, self.stderr
        );
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// A decoded WAV file.
#[derive(Debug, Clone)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub samples: Vec<i16>,
}

impl WavInfo {
    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Decode WAV bytes with an independent reader.
pub fn read_wav_bytes(data: &[u8]) -> Result<WavInfo, String> {
    let mut reader = hound::WavReader::new(Cursor::new(data)).map_err(|e| e.to_string())?;
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Read and decode a WAV file.
pub fn read_wav_file(path: &Path) -> Result<WavInfo, String> {
    let data = fs::read(path).map_err(|e| format!("Failed to read file: {}", e))?;
    read_wav_bytes(&data)
}

/// BLAKE3 hash of a WAV file's PCM payload, as reported by `render --json`.
pub fn pcm_hash_file(path: &Path) -> String {
    let data = fs::read(path).expect("Failed to read file for hashing");
    compute_pcm_hash(&data).expect("Not a PCM WAV file")
}

/// A test harness for running gedtone CLI commands.
pub struct TestHarness {
    /// Working directory for test inputs and outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run the gedtone CLI with the given arguments.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let manifest_path = gedtone_manifest_path();

        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "gedtone-cli", "--"])
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Render a genealogy file, appending `extra` arguments.
    pub fn render(&self, input: &Path, extra: &[&str]) -> CliResult {
        let mut args = vec!["render", "--input", input.to_str().unwrap()];
        args.extend_from_slice(extra);
        self.run_cli(&args)
    }

    /// Show extraction statistics for a genealogy file.
    pub fn stats(&self, input: &Path, extra: &[&str]) -> CliResult {
        let mut args = vec!["stats", "--input", input.to_str().unwrap()];
        args.extend_from_slice(extra);
        self.run_cli(&args)
    }
}

fn gedtone_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

//! Input loading for genealogy files and synthesis configuration.
//!
//! Genealogy files are read as raw bytes; decoding happens later and never
//! fails. Configuration files are JSON documents deserialized into
//! [`SynthesisParams`].

use gedtone_spec::SynthesisParams;
use std::path::{Path, PathBuf};

/// Extension given to rendered audio files.
pub const WAV_EXTENSION: &str = "wav";

/// A genealogy file loaded into memory.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading inputs.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid parameter JSON.
    ConfigParse { path: PathBuf, message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, .. } => {
                write!(f, "failed to read file '{}'", path.display())
            }
            InputError::ConfigParse { path, message } => {
                write!(f, "invalid config '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads a genealogy file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use gedtone_cli::input::load_input;
///
/// let input = load_input(Path::new("family.ged")).unwrap();
/// println!("{} bytes, hash {}", input.bytes.len(), input.source_hash);
/// ```
pub fn load_input(path: &Path) -> Result<LoadedInput, InputError> {
    let bytes = std::fs::read(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(&bytes).to_hex().to_string();

    Ok(LoadedInput {
        path: path.to_path_buf(),
        bytes,
        source_hash,
    })
}

/// Reads synthesis parameters from a JSON config file.
///
/// Missing fields take their defaults; unknown fields are rejected.
pub fn load_params(path: &Path) -> Result<SynthesisParams, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    SynthesisParams::from_json(&content).map_err(|e| InputError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Default output path: the input path with a `.wav` extension appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(WAV_EXTENSION);
    PathBuf::from(name)
}

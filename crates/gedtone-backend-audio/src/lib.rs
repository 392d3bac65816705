//! gedtone Audio Backend
//!
//! Turns a sequence of calendar months into a mono 16-bit WAV file. Each month
//! is a fixed pitch (January = C4 up to December = G5) and each occurrence of a
//! month in the source file is one short note.
//!
//! # Pipeline
//!
//! 1. [`gedtone_spec::extract_months`] scans `DATE` lines for month tokens.
//! 2. [`sequencer::sequence`] arranges one tone unit (note + silence) per
//!    occurrence, either grouped in calendar order or shuffled.
//! 3. [`mixer::assemble`] concatenates the units and normalizes to full scale.
//! 4. [`wav`] encodes the result.
//!
//! # Determinism
//!
//! Chronological renders depend only on the input and parameters. Shuffled
//! renders additionally depend on a 32-bit seed; the seed is always reported
//! in [`GenerateResult`] so any render can be reproduced.
//!
//! # Example
//!
//! ```
//! use gedtone_backend_audio::{generate, GenerateRequest};
//! use gedtone_spec::{PlayPolicy, SynthesisParams};
//!
//! let text = "1 BIRT\n2 DATE 14 JAN 1900\n";
//! let request = GenerateRequest::new(SynthesisParams::default(), PlayPolicy::Chronological);
//! let result = generate(text, &request).unwrap();
//!
//! assert_eq!(result.total, 1);
//! let wav = result.wav.expect("one date was found");
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```

pub mod error;
pub mod generate;
pub mod mixer;
pub mod rng;
pub mod sequencer;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, generate_from_bytes, generate_from_months, GenerateRequest, GenerateResult,
};
pub use mixer::{assemble, AudioBuffer};
pub use sequencer::{sequence, Segment};
pub use tone::synthesize_tone;
pub use wav::WavResult;

//! gedtone End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full render flow:
//!
//! - Rendering: genealogy file -> WAV file through the `gedtone` binary
//! - Read-back: WAV files decoded with an independent reader
//! - **Determinism**: same input and seed give byte-identical PCM
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gedtone-tests
//! ```

pub mod fixtures;
pub mod harness;

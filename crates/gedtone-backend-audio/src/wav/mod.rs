//! Deterministic WAV encoding.
//!
//! Output is always mono 16-bit PCM with a canonical 44-byte header and no
//! timestamps or optional chunks, so identical samples give identical bytes.
//! The BLAKE3 hash of the PCM payload identifies a rendering.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, write_wav, write_wav_to_vec, WAV_HEADER_LEN};

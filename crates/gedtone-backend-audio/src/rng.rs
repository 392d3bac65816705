//! Request-local RNG for shuffled playback.
//!
//! Every render owns its generator; there is no shared RNG state. A render is
//! reproducible from its 32-bit seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws a fresh seed from the thread-local entropy source.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen()
}

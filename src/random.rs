//! Seeded random sources.
//!
//! The engine never touches a thread-local or global generator: every
//! operator receives the `Rng` it should draw from.

use crate::ga::GaConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator for `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the generator a run should use for `config`.
///
/// Seeded from `config.seed` when set, otherwise from OS entropy.
pub fn rng_from_config(config: &GaConfig) -> StdRng {
    match config.seed {
        Some(seed) => create_rng(seed),
        None => StdRng::from_os_rng(),
    }
}

//! Random source used for layout generation.
//!
//! Layout generation is the only consumer of randomness. Callers either pass
//! any [`rand::Rng`] they own or ask for a seeded generator here, which makes
//! a whole game reproducible from a single `u64`.
//!
//! # Determinism
//!
//! [`seeded_rng`] always yields the same stream for the same seed, across
//! platforms and releases of this crate.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator type used for seeded layouts.
pub type LayoutRng = ChaCha8Rng;

/// Builds the deterministic generator for `seed`.
pub fn seeded_rng(seed: u64) -> LayoutRng {
    ChaCha8Rng::seed_from_u64(seed)
}

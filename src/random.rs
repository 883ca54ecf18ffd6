//! Random source construction.
//!
//! Every engine draws from an explicitly passed [`Rng`](rand::Rng); this
//! module only decides how a configured seed becomes a generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator.
///
/// Two generators built from the same seed yield identical draw streams,
/// which makes engine runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to a fresh
/// random seed when none is configured.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

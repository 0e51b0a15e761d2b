pub mod play;
pub mod roll;
pub mod sentence;
pub mod shake;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build an RNG from an optional fixed seed.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

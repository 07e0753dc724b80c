//! Deterministic random number generation for randomized strategies.
//!
//! Same seed, same sequence of choices.
//!
//! ```
//! use negamax_engine::core::GameRng;
//!
//! let moves = [1, 4, 9];
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.choose(&moves), again.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

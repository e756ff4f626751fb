//! Deterministic randomness for deck shuffling.
//!
//! The rules engine never draws random numbers. Only deck construction does,
//! and it must be reproducible: the same seed always yields the same deck, so
//! a session can be replayed or re-created on another machine.
//!
//! ```
//! use iota_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for a named purpose (e.g. `"deck"`).
    ///
    /// The same seed and context always produce the same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(seed: u64) -> Vec<u32> {
        let mut data: Vec<u32> = (0..64).collect();
        GameRng::new(seed).shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        assert_eq!(shuffled(42), shuffled(42));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(shuffled(1), shuffled(2));
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        assert_eq!(rng.for_context("deck").seed(), rng.for_context("deck").seed());
        assert_ne!(rng.for_context("deck").seed(), rng.for_context("seat").seed());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }
}

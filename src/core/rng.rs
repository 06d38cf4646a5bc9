//! Deterministic, injectable randomness for problem generation.
//!
//! ## Key Features
//!
//! - **Injectable**: generators draw through the `RandomSource` trait, so
//!   tests can script exact operands with `ScriptedRng`.
//! - **Deterministic**: `GameRng` with the same seed produces the same match.
//! - **Serializable**: O(1) state capture and restore.
//!
//! ```
//! use math_duel::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.int_in(1, 20), b.int_in(1, 20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integers.
///
/// The only required method draws from an inclusive range. Everything else
/// the generators need is derived from it.
pub trait RandomSource {
    /// Draw an integer in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn int_in(&mut self, lo: i64, hi: i64) -> i64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.int_in(0, 1) == 1
    }

    /// Pick an index into a collection of `len` items.
    ///
    /// Panics if `len` is zero.
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "Cannot pick from an empty collection");
        self.int_in(0, len as i64 - 1) as usize
    }
}

/// Shuffle a slice in place (Fisher-Yates) using any random source.
pub fn shuffle<T>(rng: &mut dyn RandomSource, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.int_in(0, i as i64) as usize;
        slice.swap(i, j);
    }
}

/// Seeded production RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.inner.gen_range(lo..=hi)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Plays back a fixed list of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a script only has to
/// be right about the draws it cares about.
///
/// ```
/// use math_duel::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(vec![7, 99]);
/// assert_eq!(rng.int_in(1, 20), 7);
/// assert_eq!(rng.int_in(1, 20), 20); // clamped
/// assert_eq!(rng.int_in(1, 20), 7); // cycled
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source. Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.int_in(0, 1000), rng2.int_in(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.int_in(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.int_in(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_int_in_is_inclusive() {
        let mut rng = GameRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;

        for _ in 0..500 {
            let v = rng.int_in(1, 3);
            assert!((1..=3).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 3;
        }

        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        shuffle(&mut rng, &mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_pick_index_and_coin() {
        let mut rng = ScriptedRng::new(vec![2, 1, 0]);

        assert_eq!(rng.pick_index(5), 2);
        assert!(rng.coin());
        assert!(!rng.coin());
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    #[should_panic(expected = "Cannot pick from an empty collection")]
    fn test_pick_index_empty() {
        let mut rng = GameRng::new(1);
        rng.pick_index(0);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.int_in(0, 1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.int_in(0, 1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.int_in(0, 1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

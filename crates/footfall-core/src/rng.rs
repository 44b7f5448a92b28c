//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! All randomness flows through a single `SimRng` owned by whoever drives the
//! simulation — the background loop owns one seeded from `SimParams::seed`,
//! and tests construct their own with a fixed seed.  No routine in the
//! workspace reaches for thread-local or OS randomness, so a given seed and
//! topology always produce the same movement sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG wrapping a seeded `SmallRng`.
///
/// Single-owner by design: the loop thread holds its own instance, and any
/// concurrent driver (tests, harnesses) must construct a separate one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Weighted random index selection.
    ///
    /// Returns an index into `weights` with probability proportional to the
    /// weight at that index; zero-weight entries are never chosen.  Returns
    /// `None` when the weights sum to zero (including the empty slice), so
    /// callers pick their own degenerate-case fallback.
    pub fn choose_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }
        let mut target = self.0.gen_range(0..total);
        weights.iter().position(|&w| {
            let w = u64::from(w);
            if target < w {
                true
            } else {
                target -= w;
                false
            }
        })
    }
}

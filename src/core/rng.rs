//! Random source passed explicitly to combat, loot and exploration.
//!
//! Game logic never reaches for a global generator. The shells own one
//! `RngSource` seeded at startup and lend it out by `&mut`; tests use a
//! seeded ChaCha generator or a [`ScriptedRandom`] that replays fixed rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Minimal random interface used by the game rules.
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    fn int_in_range(&mut self, min: i32, max: i32) -> i32;

    /// True with probability `percent`/100 (rolls 1..=100 and compares).
    fn percent_chance(&mut self, percent: u32) -> bool {
        self.int_in_range(1, 100) <= percent as i32
    }

    /// Uniform index into a collection of `len` elements. `len` must be > 0.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.int_in_range(0, len as i32 - 1) as usize
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy, or from `seed` when one is given.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of rolls.
///
/// Each draw pops the next queued value and clamps it into the requested
/// range. Once the script runs dry every draw returns `fallback` (clamped),
/// which defaults to the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<i32>,
    fallback: Option<i32>,
}

impl ScriptedRandom {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: None,
        }
    }

    /// Value returned after the script is exhausted.
    pub fn with_fallback(mut self, value: i32) -> Self {
        self.fallback = Some(value);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        let roll = self
            .rolls
            .pop_front()
            .or(self.fallback)
            .unwrap_or(min);
        roll.clamp(min, max)
    }
}

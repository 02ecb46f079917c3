//! 7-bag piece randomizer.
//!
//! The queue holds the remainder of the current bag. Whenever it would run
//! dry it is refilled with a freshly shuffled permutation of all 7 kinds
//! before the next pop, which bounds how far apart two occurrences of the
//! same kind can be (13 spawns at worst).
//!
//! Randomness comes from a small injectable LCG so tests can pin the exact
//! piece sequence with a seed.

use std::collections::VecDeque;

use blockdrop_types::{PieceKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // A zero state would produce a poor opening sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state, usable as a seed to continue the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Ordered queue of pending piece kinds backed by the 7-bag scheme.
#[derive(Debug, Clone)]
pub struct BagQueue {
    queue: VecDeque<PieceKind>,
    rng: SimpleRng,
}

impl BagQueue {
    /// Create an empty queue; the first `next` triggers the first refill.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a queue around an existing random source.
    pub fn with_rng(rng: SimpleRng) -> Self {
        Self {
            queue: VecDeque::with_capacity(ALL_KINDS.len()),
            rng,
        }
    }

    fn refill(&mut self) {
        let mut bag = ALL_KINDS;
        self.rng.shuffle(&mut bag);
        self.queue.extend(bag);
    }

    /// Pop the next kind, refilling with a fresh permutation first if empty.
    pub fn next(&mut self) -> PieceKind {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue.pop_front().expect("refilled bag is never empty")
    }

    /// Number of kinds left in the current bag.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// RNG state, for restarting a game that continues the sequence.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for BagQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

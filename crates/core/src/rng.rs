//! RNG module - shape selection for spawning
//!
//! The session draws every new shape from a [`ShapeSource`]. The default source
//! picks uniformly from the catalog using a small seeded LCG, so the same seed
//! always produces the same game. Tests inject a [`SequenceSource`] to script
//! exactly which shapes appear.

use std::fmt::Debug;

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Supplies the kind of every piece a session spawns
pub trait ShapeSource: Debug {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform choice over the whole catalog
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u32,
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for UniformSource {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::COUNT as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl SequenceSource {
    /// An empty list falls back to the square.
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(ShapeKind::Square);
        }
        Self { kinds, next: 0 }
    }

    /// Always yields `kind`
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for SequenceSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

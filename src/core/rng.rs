//! Shape randomness.
//!
//! A small LCG (Numerical Recipes constants) keeps piece generation
//! deterministic under a fixed seed, which the tests rely on. The binary
//! seeds it from the wall clock, one fresh seed per session.

use crate::core::shapes::{Shape, CATALOG};
use crate::types::SHAPE_COUNT;

/// Simple LCG (Linear Congruential Generator) RNG
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

    /// Seed from the wall clock.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a catalog template and apply a random number (0-3) of quarter
    /// turns to it. Rotation here is unconditional: the shape has no board
    /// position yet, so there is nothing to collide with.
    pub fn draw_shape(&mut self) -> Shape {
        let mut shape = CATALOG[self.next_range(SHAPE_COUNT as u32) as usize];
        for _ in 0..self.next_range(4) {
            shape = shape.rotated();
        }
        shape
    }
}

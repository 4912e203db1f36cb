//! RNG module - seedable uniform random source
//!
//! A simple LCG is all the engine needs: color draws for board fill and
//! refill, a uniform pick over adjacent position pairs, and Fisher-Yates
//! shuffles for the reshuffle engine. Seedability makes every test and
//! replay deterministic.

use crate::types::ColorId;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a color uniformly from a catalog of `num_colors` entries.
    pub fn next_color(&mut self, num_colors: u8) -> ColorId {
        ColorId(self.next_range(u32::from(num_colors)) as u8)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (for replaying a session from the same point).
    pub fn state(&self) -> u32 {
        self.state
    }
}

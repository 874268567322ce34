//! RNG module - seeded randomness for piece draws, golden cubes, and buffs
//!
//! A simple LCG (Numerical Recipes constants) owned by the game controller.
//! There is deliberately no bag randomizer: piece draws are uniform and
//! independent of history. A fixed seed reproduces the full game sequence
//! for tests.

use goldfall_types::PieceKind;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: state = (a * state + c) mod 2^32
        // Numerical Recipes constants: a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll a percentage chance: true with probability `percent`/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Pick one element uniformly from a non-empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Draw the next piece kind, uniform over all seven
    pub fn next_piece(&mut self) -> PieceKind {
        self.choose(&PieceKind::ALL)
    }

    /// Current internal state (used to reseed on restart)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

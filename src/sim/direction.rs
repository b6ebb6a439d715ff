//! Sources for the ball's initial direction
//!
//! The engine never calls a global RNG. Callers hand it a `DirectionSource`,
//! so a seeded PCG stream gives reproducible runs and tests can pin the
//! direction exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SimResult;
use crate::normalize;

/// Produces unit-length direction vectors
pub trait DirectionSource {
    fn next_direction(&mut self) -> SimResult<Vec2>;
}

/// Seeded random directions into the lower-right quadrant
///
/// Both components are drawn independently from `(0, 1)` and then
/// normalized, so the ball always starts moving right and down.
#[derive(Debug, Clone)]
pub struct SeededDirections {
    rng: Pcg32,
}

impl SeededDirections {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl DirectionSource for SeededDirections {
    fn next_direction(&mut self) -> SimResult<Vec2> {
        // Open lower bound keeps both components non-zero
        let x = self.rng.random_range(f32::EPSILON..1.0);
        let y = self.rng.random_range(f32::EPSILON..1.0);
        normalize(Vec2::new(x, y))
    }
}

/// Always yields the same direction (normalized once at construction)
#[derive(Debug, Clone, Copy)]
pub struct FixedDirection(Vec2);

impl FixedDirection {
    pub fn new(v: Vec2) -> SimResult<Self> {
        Ok(Self(normalize(v)?))
    }
}

impl DirectionSource for FixedDirection {
    fn next_direction(&mut self) -> SimResult<Vec2> {
        Ok(self.0)
    }
}

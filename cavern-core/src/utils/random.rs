#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Returns RNG.
    fn get_rng(&self) -> SmallRng;
}

/// A default random implementation.
#[derive(Default)]
pub struct DefaultRandom {
    seed: Option<u64>,
}

impl DefaultRandom {
    /// Creates a new instance `DefaultRandom` with seed: every produced generator starts from the
    /// same state, so randomized algorithms become reproducible.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> SmallRng {
        if let Some(seed) = self.seed { SmallRng::seed_from_u64(seed) } else { SmallRng::from_entropy() }
    }
}

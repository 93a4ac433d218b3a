use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of cosmetic display weights in `[0, 1)`.
pub trait WeightSource: Send + Sync {
    fn next_weight(&self) -> f64;
}

/// Draws from the thread-local generator.
pub struct ThreadWeightSource;

impl WeightSource for ThreadWeightSource {
    fn next_weight(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible weights from a fixed seed.
pub struct SeededWeightSource {
    rng: Mutex<StdRng>,
}

impl SeededWeightSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl WeightSource for SeededWeightSource {
    fn next_weight(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            Err(poisoned) => poisoned.into_inner().random::<f64>(),
        }
    }
}

//! Word selection for new sessions.

use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

/// Chooses which pool entries a session drills, and in what order.
pub trait Sampler {
    /// Picks `amount` distinct indices from `0..length`, in session order.
    ///
    /// Callers guarantee `amount <= length`.
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize> {
        (**self).sample(length, amount)
    }
}

/// Uniform sampling without replacement, driven by ChaCha8.
///
/// Two samplers built from the same seed produce the same sessions.
#[derive(Clone, Debug)]
pub struct SeededSampler {
    rng: ChaCha8Rng,
}

impl SeededSampler {
    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a sampler seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for SeededSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Sampler for SeededSampler {
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }
}

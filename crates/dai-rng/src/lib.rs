//! dai-rng: random number helpers for libdai-rs
//!
//! [`DaiRng`] is a seeded ChaCha generator for reproducible sampling.
//! The `rnd_*` free functions drive a process-wide default generator that
//! starts from [`DEFAULT_SEED`] and can be reseeded with [`rnd_seed`].

mod global;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub use global::{rnd, rnd_int, rnd_seed, rnd_stdnormal, rnd_uniform, DEFAULT_SEED};

/// Reproducible generator for sampling in iterative algorithms
///
/// Backed by ChaCha8. Serializes as its bare seed: callers persist a seed
/// so an experiment can be rerun from the start, and a restored generator
/// replays the same draws from the beginning of its stream rather than
/// resuming mid-stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct DaiRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl From<u64> for DaiRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<DaiRng> for u64 {
    fn from(rng: DaiRng) -> Self {
        rng.seed
    }
}

impl DaiRng {
    /// Generator whose stream is fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self { rng, seed }
    }

    /// Generator seeded from the thread-local OS-seeded source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Real number distributed uniformly on [0, 1)
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Real number from a standard normal distribution (Box-Muller)
    pub fn stdnormal(&mut self) -> f64 {
        // ln(0) is -inf; keep u1 strictly positive.
        let u1 = self.uniform().max(1e-300);
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// Integer distributed uniformly on the closed interval [min, max]
    ///
    /// Returns `min` if the interval is empty (`min > max`).
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        if min > max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Integer distributed uniformly on the half-open interval [0, n)
    ///
    /// Returns 0 if n <= 0.
    pub fn below(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.int_in(0, n - 1)
    }
}

/// Unseeded runs draw a fresh seed; read it back with [`DaiRng::seed`].
impl Default for DaiRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

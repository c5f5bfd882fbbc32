//! Process-wide default generator
//!
//! Shared by every thread; the first use seeds it with [`DEFAULT_SEED`].

use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::DaiRng;

/// Seed of the default generator until [`rnd_seed`] is called
pub const DEFAULT_SEED: u64 = 42;

static DEFAULT_RNG: LazyLock<Mutex<DaiRng>> =
    LazyLock::new(|| Mutex::new(DaiRng::new(DEFAULT_SEED)));

fn default_rng() -> MutexGuard<'static, DaiRng> {
    // A panic mid-draw leaves the generator usable.
    DEFAULT_RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets the seed of the default generator
pub fn rnd_seed(seed: u64) {
    *default_rng() = DaiRng::new(seed);
}

/// Returns a real number distributed uniformly on [0, 1)
pub fn rnd_uniform() -> f64 {
    default_rng().uniform()
}

/// Returns a real number from a standard normal distribution
pub fn rnd_stdnormal() -> f64 {
    default_rng().stdnormal()
}

/// Returns a random integer in the closed interval [min, max]
pub fn rnd_int(min: i32, max: i32) -> i32 {
    default_rng().int_in(min, max)
}

/// Returns a random integer in the half-open interval [0, n)
pub fn rnd(n: i32) -> i32 {
    default_rng().below(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_reseed_restarts_stream() {
        rnd_seed(5);
        let first: Vec<i32> = (0..16).map(|_| rnd_int(0, 1000)).collect();
        rnd_seed(5);
        let second: Vec<i32> = (0..16).map(|_| rnd_int(0, 1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[serial]
    fn test_matches_explicit_generator() {
        rnd_seed(DEFAULT_SEED);
        let mut local = DaiRng::new(DEFAULT_SEED);
        for _ in 0..32 {
            assert_eq!(rnd_uniform().to_bits(), local.uniform().to_bits());
        }
        assert_eq!(rnd_stdnormal().to_bits(), local.stdnormal().to_bits());
        assert_eq!(rnd(17), local.below(17));
    }

    #[test]
    #[serial]
    fn test_ranges() {
        rnd_seed(11);
        for _ in 0..500 {
            assert!((0.0..1.0).contains(&rnd_uniform()));
            assert!((1..=6).contains(&rnd_int(1, 6)));
            assert!((0..4).contains(&rnd(4)));
        }
        assert_eq!(rnd(0), 0);
    }
}

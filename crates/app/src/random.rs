use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform samples in `[0, 1)` used by the cost generators.
pub trait RandomSource: Send + Sync {
    fn unit(&self) -> f64;
}

/// Unseeded, thread-local generator. Series differ on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Reproducible generator: the same seed yields the same sample sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&self) -> f64 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.r#gen::<f64>()
    }
}

/// `round(base + (u - 0.5) * variance)`, rounding halves up.
pub fn random_cost(source: &dyn RandomSource, base: f64, variance: f64) -> i64 {
    let value = base + (source.unit() - 0.5) * variance;
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn unit(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn midpoint_sample_returns_base() {
        assert_eq!(random_cost(&Constant(0.5), 15000.0, 3000.0), 15000);
    }

    #[test]
    fn extreme_samples_stay_within_half_variance() {
        assert_eq!(random_cost(&Constant(0.0), 8000.0, 1500.0), 7250);
        let high = random_cost(&Constant(0.999_999), 8000.0, 1500.0);
        assert!(high <= 8750, "{high}");
    }

    #[test]
    fn halves_round_up() {
        // 1000 + (0.75 - 0.5) * 2 = 1000.5
        assert_eq!(random_cost(&Constant(0.75), 1000.0, 2.0), 1001);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let left: Vec<f64> = (0..16).map(|_| a.unit()).collect();
        let right: Vec<f64> = (0..16).map(|_| b.unit()).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|value| (0.0..1.0).contains(value)));
    }

    #[test]
    fn thread_random_is_in_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..100 {
            let value = source.unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}

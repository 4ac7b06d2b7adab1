//! Source of uniformly distributed random integers.

use rand::Rng;

/// Produces uniformly distributed integers below a bound.
///
/// This is the only randomness the game consumes. Seeding is the
/// caller's business.
pub trait Entropy {
    /// Returns an integer in `[0, n)`. `n` must be positive.
    fn random_below(&mut self, n: usize) -> usize;
}

/// Adapter exposing any [`rand::Rng`] as an [`Entropy`] source.
#[derive(Debug, Clone)]
pub struct RandEntropy<R>(R);

impl<R: Rng> RandEntropy<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> Entropy for RandEntropy<R> {
    fn random_below(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_values_stay_below_bound() {
        let mut entropy = RandEntropy::new(StdRng::seed_from_u64(7));
        for n in 1..20 {
            for _ in 0..100 {
                assert!(entropy.random_below(n) < n);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandEntropy::new(StdRng::seed_from_u64(42));
        let mut b = RandEntropy::new(StdRng::seed_from_u64(42));
        let left: Vec<_> = (0..32).map(|_| a.random_below(10)).collect();
        let right: Vec<_> = (0..32).map(|_| b.random_below(10)).collect();
        assert_eq!(left, right);
    }
}

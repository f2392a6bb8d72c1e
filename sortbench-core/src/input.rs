//! Benchmark input generation.

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

/// Source of benchmark inputs.
///
/// The harness calls `generate` exactly once per input size; every algorithm
/// measured at that size sees the same input. Tests substitute deterministic
/// implementations.
pub trait InputSource {
    /// Produce one input of exactly `len` elements.
    fn generate(&mut self, len: usize) -> Vec<i64>;
}

/// Uniform random inputs over `[-bound, bound)`.
pub struct RandomInputs {
    bound: i64,
    rng: ThreadRng,
}

impl RandomInputs {
    /// Inputs for a sweep whose largest size is `2^max_size_exponent`.
    ///
    /// Values span `[-2^(k+1), 2^(k+1))` for `k = max_size_exponent`, wide
    /// enough that even the largest input rarely saturates with duplicates.
    pub fn for_exponent(max_size_exponent: u32) -> Self {
        Self::with_bound(1i64 << (max_size_exponent + 1))
    }

    /// Inputs with an explicit value bound.
    pub fn with_bound(bound: i64) -> Self {
        debug_assert!(bound > 0);
        Self {
            bound,
            rng: thread_rng(),
        }
    }
}

impl InputSource for RandomInputs {
    fn generate(&mut self, len: usize) -> Vec<i64> {
        (0..len)
            .map(|_| self.rng.gen_range(-self.bound..self.bound))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_inputs_length_and_range() {
        let mut inputs = RandomInputs::for_exponent(4);
        let v = inputs.generate(1000);
        assert_eq!(v.len(), 1000);
        assert!(v.iter().all(|&x| (-32..32).contains(&x)));
    }

    #[test]
    fn test_random_inputs_fresh_per_call() {
        let mut inputs = RandomInputs::with_bound(1 << 30);
        // 64 samples from a 2^31-wide range colliding entirely is not a thing.
        assert_ne!(inputs.generate(64), inputs.generate(64));
    }
}

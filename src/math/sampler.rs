//! Randomness for key generation and encryption.
//!
//! Three distributions back the whole crate: uniform over [0, q), uniform
//! binary, and uniform signed over a closed interval [-B, B]. The sampler
//! owns a ChaCha20 generator and is passed explicitly (`&mut`) into every
//! operation that draws randomness, which both makes tests replayable via
//! [`Sampler::with_seed`] and makes access to the generator exclusive by
//! construction.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::modular::ModQ;
use super::poly::Poly;

/// Uniform / binary / bounded-uniform sampler over a ChaCha20 generator.
pub struct Sampler {
    rng: ChaCha20Rng,
}

impl Sampler {
    /// Creates a sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: ChaCha20Rng::from_entropy() }
    }

    /// Creates a seeded sampler for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from [0, q).
    pub fn uniform(&mut self, q: i64) -> i64 {
        self.rng.gen_range(0..q)
    }

    /// Uniform draw from {0, 1}.
    pub fn binary(&mut self) -> i64 {
        self.rng.gen_range(0..=1)
    }

    /// Uniform signed draw from the closed interval [-bound, bound].
    pub fn noise(&mut self, bound: i64) -> i64 {
        self.rng.gen_range(-bound..=bound)
    }

    /// Length-n vector of uniform draws from [0, q).
    pub fn uniform_vec(&mut self, n: usize, q: i64) -> Vec<i64> {
        (0..n).map(|_| self.uniform(q)).collect()
    }

    /// Uniform polynomial in R_q.
    pub fn uniform_poly(&mut self, n: usize, q: i64) -> Poly {
        Poly::from_coeffs(self.uniform_vec(n, q), q)
    }

    /// Binary polynomial (coefficients in {0, 1}), carried mod q.
    pub fn binary_poly(&mut self, n: usize, q: i64) -> Poly {
        Poly::from_coeffs((0..n).map(|_| self.binary()).collect(), q)
    }

    /// Noise polynomial: signed draws from [-bound, bound] mapped into
    /// [0, q).
    pub fn noise_poly(&mut self, n: usize, bound: i64, q: i64) -> Poly {
        Poly::from_coeffs(
            (0..n).map(|_| ModQ::reduce(self.noise(bound), q)).collect(),
            q,
        )
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_range() {
        let mut sampler = Sampler::with_seed(1);
        let q = 97;
        for _ in 0..1000 {
            let v = sampler.uniform(q);
            assert!((0..q).contains(&v));
        }
    }

    #[test]
    fn test_binary_values() {
        let mut sampler = Sampler::with_seed(2);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let v = sampler.binary();
            assert!(v == 0 || v == 1);
            seen[v as usize] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_noise_bounded() {
        let mut sampler = Sampler::with_seed(3);
        let bound = 5;
        for _ in 0..1000 {
            let v = sampler.noise(bound);
            assert!((-bound..=bound).contains(&v));
        }
    }

    #[test]
    fn test_noise_zero_bound() {
        let mut sampler = Sampler::with_seed(4);
        for _ in 0..10 {
            assert_eq!(sampler.noise(0), 0);
        }
    }

    #[test]
    fn test_seeded_replay() {
        let q = 1 << 20;
        let a: Vec<i64> = Sampler::with_seed(42).uniform_vec(32, q);
        let b: Vec<i64> = Sampler::with_seed(42).uniform_vec(32, q);
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_poly_wraps_negatives() {
        let mut sampler = Sampler::with_seed(5);
        let q = 101;
        let p = sampler.noise_poly(64, 3, q);
        for &c in p.coeffs() {
            // stored representative is either small or just below q
            assert!(c <= 3 || c >= q - 3);
        }
    }
}

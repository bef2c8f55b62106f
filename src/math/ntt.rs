//! Number-Theoretic Transform based negacyclic multiplication.
//!
//! Cooley-Tukey / Gentleman-Sande radix-2 NTT over Z_q for q a prime with
//! q ≡ 1 (mod 2n). A primitive 2n-th root of unity ψ (ψ^n = −1) folds the
//! negacyclic wrap into the transform, so multiplication modulo X^n + 1
//! becomes pointwise multiplication in the evaluation domain.
//!
//! The demonstration moduli in this crate are mostly powers of two, which
//! are not NTT-friendly; [`SchoolbookMul`](super::ring::SchoolbookMul)
//! covers those. Use this implementation when the modulus permits it.
//!
//! # Example
//!
//! ```
//! use lattice_he::math::{NttRing, Poly, RingMul};
//!
//! let ring = NttRing::new(256, 7681);
//! let a = Poly::constant(2, 256, 7681);
//! let b = Poly::constant(3, 256, 7681);
//! let c = ring.negacyclic_mul(&a, &b).unwrap();
//! assert_eq!(c.coeff(0), 6);
//! ```

use crate::error::{HeError, Result};

use super::poly::Poly;
use super::ring::RingMul;

/// Precomputed NTT tables for one (n, q) ring.
///
/// Create once and reuse; construction finds a primitive 2n-th root of
/// unity and precomputes twiddle factors in the bit-reversed order the
/// butterflies consume them in.
#[derive(Debug, Clone)]
pub struct NttRing {
    /// Ring dimension (power of two).
    n: usize,
    /// Modulus (prime, q ≡ 1 mod 2n).
    q: i64,
    /// Forward twiddle factors (powers of ψ, bit-reversed order).
    psi_powers: Vec<u64>,
    /// Inverse twiddle factors (powers of ψ^(-1), bit-reversed order).
    psi_inv_powers: Vec<u64>,
    /// n^(-1) mod q for inverse scaling.
    n_inv: u64,
}

impl NttRing {
    /// Creates NTT tables for the given dimension and modulus.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two, or if `q` is not a prime
    /// satisfying q ≡ 1 (mod 2n). Primality itself is not tested; a
    /// composite modulus surfaces as a missing primitive root.
    pub fn new(n: usize, q: i64) -> Self {
        assert!(n.is_power_of_two(), "n must be a power of two");
        assert!(q > 1, "q must exceed 1");
        let qu = q as u64;
        assert!(qu % (2 * n as u64) == 1, "q must be ≡ 1 (mod 2n)");

        let psi = Self::find_primitive_root(2 * n as u64, qu);
        let psi_inv = Self::mod_pow(psi, qu - 2, qu);
        let n_inv = Self::mod_pow(n as u64, qu - 2, qu);

        Self {
            n,
            q,
            psi_powers: Self::twiddle_table(n, psi, qu),
            psi_inv_powers: Self::twiddle_table(n, psi_inv, qu),
            n_inv,
        }
    }

    /// Ring dimension n.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Modulus q.
    pub fn modulus(&self) -> i64 {
        self.q
    }

    /// Forward NTT in place (Cooley-Tukey decimation-in-time).
    fn forward(&self, coeffs: &mut [u64]) {
        let n = self.n;
        let q = self.q as u64;

        let mut t = n;
        let mut m = 1;
        while m < n {
            t >>= 1;
            for i in 0..m {
                let j1 = 2 * i * t;
                let w = self.psi_powers[m + i];
                for j in j1..j1 + t {
                    let u = coeffs[j];
                    let v = Self::mul_mod(coeffs[j + t], w, q);
                    coeffs[j] = if u + v >= q { u + v - q } else { u + v };
                    coeffs[j + t] = if u >= v { u - v } else { q - v + u };
                }
            }
            m <<= 1;
        }
    }

    /// Inverse NTT in place (Gentleman-Sande decimation-in-frequency),
    /// including the final scale by n^(-1).
    fn inverse(&self, coeffs: &mut [u64]) {
        let n = self.n;
        let q = self.q as u64;

        let mut t = 1;
        let mut m = n;
        while m > 1 {
            m >>= 1;
            for i in 0..m {
                let j1 = 2 * i * t;
                let w = self.psi_inv_powers[m + i];
                for j in j1..j1 + t {
                    let u = coeffs[j];
                    let v = coeffs[j + t];
                    coeffs[j] = if u + v >= q { u + v - q } else { u + v };
                    let diff = if u >= v { u - v } else { q - v + u };
                    coeffs[j + t] = Self::mul_mod(diff, w, q);
                }
            }
            t <<= 1;
        }

        for c in coeffs.iter_mut() {
            *c = Self::mul_mod(*c, self.n_inv, q);
        }
    }

    #[inline]
    fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
        ((a as u128 * b as u128) % q as u128) as u64
    }

    fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
        let mut result = 1u64;
        base %= m;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Self::mul_mod(result, base, m);
            }
            exp >>= 1;
            base = Self::mul_mod(base, base, m);
        }
        result
    }

    /// Finds ψ of exact order `order` modulo prime q.
    fn find_primitive_root(order: u64, q: u64) -> u64 {
        let exp = (q - 1) / order;
        for g in 2..q {
            let candidate = Self::mod_pow(g, exp, q);
            if Self::mod_pow(candidate, order, q) == 1
                && Self::mod_pow(candidate, order / 2, q) != 1
            {
                return candidate;
            }
        }
        panic!("no primitive root of order {order} modulo {q}");
    }

    /// Twiddle factors indexed so that level m of the butterfly network
    /// reads factors[m..2m]: factors[2^l] = ψ^(n/2^(l+1)), composite
    /// indices are products of their power-of-two parts. Index 0 is
    /// unused.
    fn twiddle_table(n: usize, psi: u64, q: u64) -> Vec<u64> {
        let mut factors = vec![0u64; n];
        if n == 1 {
            return factors;
        }
        for m in 1..n {
            if m.is_power_of_two() {
                factors[m] = Self::mod_pow(psi, (n / (2 * m)) as u64, q);
            } else {
                let prev = m & (m - 1); // clear lowest set bit
                let step = m & m.wrapping_neg(); // lowest set bit
                factors[m] = Self::mul_mod(factors[prev], factors[step], q);
            }
        }
        factors
    }
}

impl RingMul for NttRing {
    fn negacyclic_mul(&self, a: &Poly, b: &Poly) -> Result<Poly> {
        if a.len() != self.n {
            return Err(HeError::InvalidSize { expected: self.n, actual: a.len() });
        }
        if b.len() != self.n {
            return Err(HeError::InvalidSize { expected: self.n, actual: b.len() });
        }
        debug_assert_eq!(a.modulus(), self.q, "operand modulus must match ring");
        debug_assert_eq!(b.modulus(), self.q, "operand modulus must match ring");

        let mut fa: Vec<u64> = a.coeffs().iter().map(|&c| c as u64).collect();
        let mut fb: Vec<u64> = b.coeffs().iter().map(|&c| c as u64).collect();
        self.forward(&mut fa);
        self.forward(&mut fb);

        let q = self.q as u64;
        let mut prod: Vec<u64> = fa
            .iter()
            .zip(fb.iter())
            .map(|(&x, &y)| Self::mul_mod(x, y, q))
            .collect();
        self.inverse(&mut prod);

        Ok(Poly::from_coeffs(prod.into_iter().map(|c| c as i64).collect(), self.q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ring::SchoolbookMul;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const Q: i64 = 7681;

    #[test]
    fn test_multiply_by_one() {
        let n = 64;
        let ring = NttRing::new(n, Q);
        let a = Poly::from_coeffs((0..n as i64).collect(), Q);
        let one = Poly::constant(1, n, Q);
        assert_eq!(ring.negacyclic_mul(&a, &one).unwrap(), a);
    }

    #[test]
    fn test_wrap_negates() {
        let n = 64;
        let ring = NttRing::new(n, Q);
        let mut xc = vec![0; n];
        xc[1] = 1;
        let mut tc = vec![0; n];
        tc[n - 1] = 1;
        let x = Poly::from_coeffs(xc, Q);
        let top = Poly::from_coeffs(tc, Q);
        let c = ring.negacyclic_mul(&x, &top).unwrap();
        assert_eq!(c.coeff(0), Q - 1);
        assert!(c.coeffs()[1..].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_matches_schoolbook() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        for n in [16, 64, 256] {
            let ring = NttRing::new(n, Q);
            for _ in 0..8 {
                let a = Poly::from_coeffs((0..n).map(|_| rng.gen_range(0..Q)).collect(), Q);
                let b = Poly::from_coeffs((0..n).map(|_| rng.gen_range(0..Q)).collect(), Q);
                let fast = ring.negacyclic_mul(&a, &b).unwrap();
                let slow = SchoolbookMul.negacyclic_mul(&a, &b).unwrap();
                assert_eq!(fast, slow, "mismatch at n={n}");
            }
        }
    }

    #[test]
    fn test_matches_schoolbook_large_prime() {
        // 60-bit NTT-friendly prime, q ≡ 1 (mod 2^14)
        let q: i64 = 1152921504606830593;
        let n = 128;
        let ring = NttRing::new(n, q);
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        let a = Poly::from_coeffs((0..n).map(|_| rng.gen_range(0..q)).collect(), q);
        let b = Poly::from_coeffs((0..n).map(|_| rng.gen_range(0..q)).collect(), q);
        let fast = ring.negacyclic_mul(&a, &b).unwrap();
        let slow = SchoolbookMul.negacyclic_mul(&a, &b).unwrap();
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_size_mismatch() {
        let ring = NttRing::new(64, Q);
        let a = Poly::zero(32, Q);
        let b = Poly::zero(64, Q);
        assert!(matches!(
            ring.negacyclic_mul(&a, &b),
            Err(HeError::InvalidSize { .. })
        ));
    }
}

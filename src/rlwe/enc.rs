//! RLWE key generation, encryption, decryption, and homomorphic operators.

use tracing::debug;

use crate::error::{HeError, Result};
use crate::math::{ModQ, Poly, RingMul, Sampler};
use crate::params::Params;

use super::types::{RlweCiphertext, RlweSecretKey};

impl RlweSecretKey {
    /// Generates a binary secret polynomial of length n.
    pub fn generate(params: &Params, sampler: &mut Sampler) -> Self {
        debug!(n = params.n, "generating RLWE secret key");
        Self { s: sampler.binary_poly(params.n, params.q) }
    }
}

impl RlweCiphertext {
    /// Encrypts a message polynomial with coefficients in [0, t).
    ///
    /// Samples a uniform a and noise e, then computes
    /// b = a·s + Δ·m + e.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the message length differs
    /// from the key length.
    pub fn encrypt(
        message: &Poly,
        sk: &RlweSecretKey,
        params: &Params,
        ring: &dyn RingMul,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        if message.len() != sk.ring_dim() {
            return Err(HeError::InvalidSize {
                expected: sk.ring_dim(),
                actual: message.len(),
            });
        }

        let q = params.q;
        let n = sk.ring_dim();
        let a = sampler.uniform_poly(n, q);
        let e = sampler.noise_poly(n, params.noise_bound, q);
        let scaled_m = message.scalar_mul(params.delta());

        let a_s = ring.negacyclic_mul(&a, &sk.s)?;
        let b = a_s.add(&scaled_m)?.add(&e)?;

        Ok(Self { a, b })
    }

    /// Decrypts to the message polynomial with coefficients in [0, t).
    ///
    /// Computes b − a·s, centres each coefficient, divides by Δ with
    /// rounding half away from zero, and reduces mod t. The returned
    /// polynomial carries modulus t.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ciphertext dimensions
    /// disagree with the key.
    pub fn decrypt(
        &self,
        sk: &RlweSecretKey,
        params: &Params,
        ring: &dyn RingMul,
    ) -> Result<Poly> {
        let n = sk.ring_dim();
        if self.a.len() != n || self.b.len() != n {
            return Err(HeError::InvalidSize { expected: n, actual: self.a.len() });
        }

        let a_s = ring.negacyclic_mul(&self.a, &sk.s)?;
        let diff = self.b.sub(&a_s)?;

        let delta = params.delta();
        let coeffs = diff
            .centered()
            .into_iter()
            .map(|c| ModQ::round_div(c, delta).rem_euclid(params.t))
            .collect();

        Ok(Poly::from_coeffs(coeffs, params.t))
    }

    /// Homomorphic addition: decrypts to (m1 + m2) mod t
    /// coefficient-wise.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ring degrees differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            a: self.a.add(&other.a)?,
            b: self.b.add(&other.b)?,
        })
    }

    /// Homomorphic subtraction: decrypts to (m1 − m2) mod t
    /// coefficient-wise.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ring degrees differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            a: self.a.sub(&other.a)?,
            b: self.b.sub(&other.b)?,
        })
    }

    /// Scalar multiplication: decrypts to (c·m) mod t while the scaled
    /// noise stays below Δ/2.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        Self {
            a: self.a.scalar_mul(scalar),
            b: self.b.scalar_mul(scalar),
        }
    }

    /// Raw negacyclic product of two ciphertext pairs: (a1·a2, b1·b2).
    ///
    /// This is **not** an RLWE encryption of m1·m2. The true ciphertext
    /// product is degree two in the secret key and needs relinearisation
    /// before it decrypts under (a, b) form; this crate provides none.
    /// The result is shaped like an RLWE ciphertext purely by
    /// convention, decrypting it is undefined, and the operation exists
    /// only as a primitive for callers building their own multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ring degrees differ.
    pub fn raw_negacyclic_pair(&self, other: &Self, ring: &dyn RingMul) -> Result<Self> {
        Ok(Self {
            a: ring.negacyclic_mul(&self.a, &other.a)?,
            b: ring.negacyclic_mul(&self.b, &other.b)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::SchoolbookMul;

    fn test_params() -> Params {
        Params::new(64, 16384, 256, 3)
    }

    fn message(params: &Params) -> Poly {
        Poly::from_coeffs(
            (0..params.n as i64).map(|i| i % params.t).collect(),
            params.q,
        )
    }

    #[test]
    fn test_roundtrip() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(201);
        let sk = RlweSecretKey::generate(&params, &mut sampler);
        let m = message(&params);

        let ct = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let dec = ct.decrypt(&sk, &params, &SchoolbookMul).unwrap();

        for i in 0..params.n {
            assert_eq!(dec.coeff(i), m.coeff(i), "coefficient {i}");
        }
    }

    #[test]
    fn test_roundtrip_zero() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(202);
        let sk = RlweSecretKey::generate(&params, &mut sampler);
        let m = Poly::zero(params.n, params.q);

        let ct = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let dec = ct.decrypt(&sk, &params, &SchoolbookMul).unwrap();
        assert!(dec.is_zero());
    }

    #[test]
    fn test_encrypt_size_mismatch() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(203);
        let sk = RlweSecretKey::generate(&params, &mut sampler);
        let short = Poly::zero(params.n / 2, params.q);

        assert!(matches!(
            RlweCiphertext::encrypt(&short, &sk, &params, &SchoolbookMul, &mut sampler),
            Err(HeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_homomorphic_add() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(204);
        let sk = RlweSecretKey::generate(&params, &mut sampler);

        let m1 = Poly::from_coeffs((0..params.n as i64).map(|i| (i + 1) % params.t).collect(), params.q);
        let m2 = Poly::from_coeffs((0..params.n as i64).map(|i| (i + 2) % params.t).collect(), params.q);

        let ct1 = RlweCiphertext::encrypt(&m1, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let ct2 = RlweCiphertext::encrypt(&m2, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();

        let dec = ct1.add(&ct2).unwrap().decrypt(&sk, &params, &SchoolbookMul).unwrap();
        for i in 0..params.n {
            assert_eq!(dec.coeff(i), (m1.coeff(i) + m2.coeff(i)) % params.t);
        }
    }

    #[test]
    fn test_homomorphic_sub() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(205);
        let sk = RlweSecretKey::generate(&params, &mut sampler);

        let m1 = message(&params);
        let m2 = Poly::from_coeffs((0..params.n as i64).map(|i| (3 * i) % params.t).collect(), params.q);

        let ct1 = RlweCiphertext::encrypt(&m1, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let ct2 = RlweCiphertext::encrypt(&m2, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();

        let dec = ct1.sub(&ct2).unwrap().decrypt(&sk, &params, &SchoolbookMul).unwrap();
        for i in 0..params.n {
            let expected = (m1.coeff(i) - m2.coeff(i)).rem_euclid(params.t);
            assert_eq!(dec.coeff(i), expected);
        }
    }

    #[test]
    fn test_scalar_mul() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(206);
        let sk = RlweSecretKey::generate(&params, &mut sampler);
        let m = Poly::from_coeffs((0..params.n as i64).map(|i| i % 16).collect(), params.q);

        let ct = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let dec = ct.scalar_mul(4).decrypt(&sk, &params, &SchoolbookMul).unwrap();
        for i in 0..params.n {
            assert_eq!(dec.coeff(i), (4 * m.coeff(i)) % params.t);
        }
    }

    #[test]
    fn test_raw_pair_has_ring_degree() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(207);
        let sk = RlweSecretKey::generate(&params, &mut sampler);
        let m = message(&params);

        let ct1 = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let ct2 = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, &mut sampler).unwrap();

        // only the shape of the result is meaningful
        let raw = ct1.raw_negacyclic_pair(&ct2, &SchoolbookMul).unwrap();
        assert_eq!(raw.ring_dim(), params.n);
    }
}

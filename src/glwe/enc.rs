//! GLWE key generation, encryption, decryption, and homomorphic
//! operators.
//!
//! The scaled-message entry points (`encrypt_scaled`,
//! `decrypt_with_delta`) are shared with the layered GLev scheme, which
//! substitutes its per-level scaling factor for the native Δ = ⌊q/t⌋.
//! Keeping one code path for both guarantees encryption and decryption
//! can never disagree on the factor.

use tracing::debug;

use crate::error::{HeError, Result};
use crate::math::{ModQ, Poly, RingMul, Sampler};
use crate::params::Params;

use super::types::{GlweCiphertext, GlwePublicKey, GlweSecretKey};

impl GlweSecretKey {
    /// Generates k independent binary secret polynomials of length n.
    pub fn generate(k: usize, params: &Params, sampler: &mut Sampler) -> Self {
        debug!(k, n = params.n, "generating GLWE secret key");
        Self {
            s: (0..k).map(|_| sampler.binary_poly(params.n, params.q)).collect(),
        }
    }
}

impl GlwePublicKey {
    /// Derives a public key: uniform pk2, then pk1 = Σ pk2_i·s_i + e
    /// with noise coefficients in [-B, B].
    pub fn generate(
        sk: &GlweSecretKey,
        params: &Params,
        ring: &dyn RingMul,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        let n = params.n;
        let q = params.q;
        debug!(k = sk.rank(), n, "deriving GLWE public key");

        let pk2: Vec<Poly> = (0..sk.rank()).map(|_| sampler.uniform_poly(n, q)).collect();
        let e = sampler.noise_poly(n, params.noise_bound, q);

        let mut acc = Poly::zero(n, q);
        for (a_i, s_i) in pk2.iter().zip(sk.s.iter()) {
            acc = acc.add(&ring.negacyclic_mul(a_i, s_i)?)?;
        }
        let pk1 = acc.add(&e)?;

        Ok(Self { pk1, pk2 })
    }
}

impl GlweCiphertext {
    /// Encrypts a message polynomial with coefficients in [0, t) under
    /// the public key.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the message length differs
    /// from n.
    pub fn encrypt(
        message: &Poly,
        pk: &GlwePublicKey,
        params: &Params,
        ring: &dyn RingMul,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        if message.len() != params.n {
            return Err(HeError::InvalidSize {
                expected: params.n,
                actual: message.len(),
            });
        }
        let scaled_m = message.scalar_mul(params.delta());
        Self::encrypt_scaled(&scaled_m, pk, params, ring, sampler)
    }

    /// Encrypts an already-scaled value directly: the caller signs
    /// `scaled_m` as-is instead of having Δ·m applied here. Fresh
    /// randomness (binary u, noise e1 and e2_i) per call.
    pub(crate) fn encrypt_scaled(
        scaled_m: &Poly,
        pk: &GlwePublicKey,
        params: &Params,
        ring: &dyn RingMul,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        let n = params.n;
        let q = params.q;
        let k = pk.rank();

        let u = sampler.binary_poly(n, q);
        let e1 = sampler.noise_poly(n, params.noise_bound, q);

        let pk1_u = ring.negacyclic_mul(&pk.pk1, &u)?;
        let b = pk1_u.add(scaled_m)?.add(&e1)?;

        let mut d_tilde = Vec::with_capacity(k);
        for pk2_i in &pk.pk2 {
            let e2_i = sampler.noise_poly(n, params.noise_bound, q);
            d_tilde.push(ring.negacyclic_mul(pk2_i, &u)?.add(&e2_i)?);
        }

        Ok(Self { b, d_tilde })
    }

    /// Decrypts to the message polynomial with coefficients in [0, t).
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ciphertext dimensions
    /// disagree with the key.
    pub fn decrypt(
        &self,
        sk: &GlweSecretKey,
        params: &Params,
        ring: &dyn RingMul,
    ) -> Result<Poly> {
        self.decrypt_with_delta(sk, params, params.delta(), ring)
    }

    /// Decryption phase with a caller-supplied scaling factor: computes
    /// b − Σ d̃_i·s_i, centres, divides by `delta` with rounding, and
    /// reduces mod t.
    pub(crate) fn decrypt_with_delta(
        &self,
        sk: &GlweSecretKey,
        params: &Params,
        delta: i64,
        ring: &dyn RingMul,
    ) -> Result<Poly> {
        if self.d_tilde.len() != sk.rank() {
            return Err(HeError::InvalidSize {
                expected: sk.rank(),
                actual: self.d_tilde.len(),
            });
        }
        if self.b.len() != params.n {
            return Err(HeError::InvalidSize {
                expected: params.n,
                actual: self.b.len(),
            });
        }

        let mut d_s = Poly::zero(params.n, params.q);
        for (d_i, s_i) in self.d_tilde.iter().zip(sk.s.iter()) {
            d_s = d_s.add(&ring.negacyclic_mul(d_i, s_i)?)?;
        }
        let diff = self.b.sub(&d_s)?;

        let coeffs = diff
            .centered()
            .into_iter()
            .map(|c| ModQ::round_div(c, delta).rem_euclid(params.t))
            .collect();

        Ok(Poly::from_coeffs(coeffs, params.t))
    }

    /// Homomorphic addition on the body and every mask polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ranks or ring degrees
    /// differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_rank(other)?;
        let d_tilde = self
            .d_tilde
            .iter()
            .zip(other.d_tilde.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { b: self.b.add(&other.b)?, d_tilde })
    }

    /// Homomorphic subtraction on the body and every mask polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the ranks or ring degrees
    /// differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_rank(other)?;
        let d_tilde = self
            .d_tilde
            .iter()
            .zip(other.d_tilde.iter())
            .map(|(a, b)| a.sub(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { b: self.b.sub(&other.b)?, d_tilde })
    }

    /// Scalar multiplication on the body and every mask polynomial.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        Self {
            b: self.b.scalar_mul(scalar),
            d_tilde: self.d_tilde.iter().map(|d| d.scalar_mul(scalar)).collect(),
        }
    }

    fn check_rank(&self, other: &Self) -> Result<()> {
        if self.d_tilde.len() != other.d_tilde.len() {
            return Err(HeError::InvalidSize {
                expected: self.d_tilde.len(),
                actual: other.d_tilde.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::SchoolbookMul;

    const K: usize = 2;

    fn test_params() -> Params {
        Params::new(64, 1 << 32, 256, 8)
    }

    fn keypair(params: &Params, sampler: &mut Sampler) -> (GlweSecretKey, GlwePublicKey) {
        let sk = GlweSecretKey::generate(K, params, sampler);
        let pk = GlwePublicKey::generate(&sk, params, &SchoolbookMul, sampler).unwrap();
        (sk, pk)
    }

    fn message(params: &Params) -> Poly {
        Poly::from_coeffs(
            (0..params.n as i64).map(|i| (5 * i + 1) % params.t).collect(),
            params.q,
        )
    }

    #[test]
    fn test_public_key_relation() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(301);
        let (sk, pk) = keypair(&params, &mut sampler);

        // pk1 - Σ pk2_i·s_i must be the small noise polynomial
        let mut acc = Poly::zero(params.n, params.q);
        for (a_i, s_i) in pk.pk2.iter().zip(sk.s.iter()) {
            acc = acc.add(&SchoolbookMul.negacyclic_mul(a_i, s_i).unwrap()).unwrap();
        }
        let residual = pk.pk1.sub(&acc).unwrap();
        for &c in &residual.centered() {
            assert!(c.abs() <= params.noise_bound);
        }
    }

    #[test]
    fn test_roundtrip() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(302);
        let (sk, pk) = keypair(&params, &mut sampler);
        let m = message(&params);

        let ct = GlweCiphertext::encrypt(&m, &pk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let dec = ct.decrypt(&sk, &params, &SchoolbookMul).unwrap();

        for i in 0..params.n {
            assert_eq!(dec.coeff(i), m.coeff(i), "coefficient {i}");
        }
    }

    #[test]
    fn test_encrypt_size_mismatch() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(303);
        let (_, pk) = keypair(&params, &mut sampler);
        let short = Poly::zero(params.n - 1, params.q);

        assert!(matches!(
            GlweCiphertext::encrypt(&short, &pk, &params, &SchoolbookMul, &mut sampler),
            Err(HeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_decrypt_rank_mismatch() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(304);
        let (_, pk) = keypair(&params, &mut sampler);
        let wrong_sk = GlweSecretKey::generate(K + 1, &params, &mut sampler);
        let m = message(&params);

        let ct = GlweCiphertext::encrypt(&m, &pk, &params, &SchoolbookMul, &mut sampler).unwrap();
        assert!(matches!(
            ct.decrypt(&wrong_sk, &params, &SchoolbookMul),
            Err(HeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_homomorphic_add_sub() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(305);
        let (sk, pk) = keypair(&params, &mut sampler);

        let m1 = message(&params);
        let m2 = Poly::from_coeffs((0..params.n as i64).map(|i| (i + 9) % params.t).collect(), params.q);

        let ct1 = GlweCiphertext::encrypt(&m1, &pk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let ct2 = GlweCiphertext::encrypt(&m2, &pk, &params, &SchoolbookMul, &mut sampler).unwrap();

        let sum = ct1.add(&ct2).unwrap().decrypt(&sk, &params, &SchoolbookMul).unwrap();
        let diff = ct1.sub(&ct2).unwrap().decrypt(&sk, &params, &SchoolbookMul).unwrap();
        for i in 0..params.n {
            assert_eq!(sum.coeff(i), (m1.coeff(i) + m2.coeff(i)) % params.t);
            assert_eq!(diff.coeff(i), (m1.coeff(i) - m2.coeff(i)).rem_euclid(params.t));
        }
    }

    #[test]
    fn test_scalar_mul() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(306);
        let (sk, pk) = keypair(&params, &mut sampler);
        let m = Poly::from_coeffs((0..params.n as i64).map(|i| i % 32).collect(), params.q);

        let ct = GlweCiphertext::encrypt(&m, &pk, &params, &SchoolbookMul, &mut sampler).unwrap();
        let dec = ct.scalar_mul(3).decrypt(&sk, &params, &SchoolbookMul).unwrap();
        for i in 0..params.n {
            assert_eq!(dec.coeff(i), (3 * m.coeff(i)) % params.t);
        }
    }

    #[test]
    fn test_add_rank_mismatch() {
        let params = test_params();
        let mut sampler = Sampler::with_seed(307);
        let (_, pk_a) = keypair(&params, &mut sampler);
        let sk_b = GlweSecretKey::generate(K + 1, &params, &mut sampler);
        let pk_b = GlwePublicKey::generate(&sk_b, &params, &SchoolbookMul, &mut sampler).unwrap();
        let m = message(&params);

        let ct_a = GlweCiphertext::encrypt(&m, &pk_a, &params, &SchoolbookMul, &mut sampler).unwrap();
        let ct_b = GlweCiphertext::encrypt(&m, &pk_b, &params, &SchoolbookMul, &mut sampler).unwrap();
        assert!(matches!(ct_a.add(&ct_b), Err(HeError::InvalidSize { .. })));
    }
}

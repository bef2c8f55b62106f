//! LWE key generation, encryption, decryption, and homomorphic operators.

use tracing::debug;

use crate::error::{HeError, Result};
use crate::math::{ModQ, Sampler};
use crate::params::Params;

use super::types::{LweCiphertext, LweSecretKey};

impl LweSecretKey {
    /// Generates a binary secret key of length k.
    pub fn generate(k: usize, sampler: &mut Sampler) -> Self {
        debug!(k, "generating LWE secret key");
        Self { s: (0..k).map(|_| sampler.binary()).collect() }
    }

    /// Wraps existing coefficients as a secret key.
    pub fn from_coeffs(s: Vec<i64>) -> Self {
        Self { s }
    }
}

impl LweCiphertext {
    /// Encrypts a scalar message m ∈ [0, t).
    ///
    /// Samples a uniform mask a ∈ Z_q^k and noise e ∈ [-B, B], then
    /// computes b = ⟨a, s⟩ + Δ·m + e (mod q).
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidMessage`] when `message` lies outside
    /// [0, t).
    pub fn encrypt(
        message: i64,
        sk: &LweSecretKey,
        params: &Params,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        if message < 0 || message >= params.t {
            return Err(HeError::InvalidMessage(message));
        }

        let q = params.q;
        let a = sampler.uniform_vec(sk.dim(), q);
        let e = sampler.noise(params.noise_bound);

        let inner = ModQ::dot_product(&a, &sk.s, q)?;
        let signal = params.delta() as i128 * message as i128;
        let b = ModQ::reduce(((inner as i128 + signal + e as i128) % q as i128) as i64, q);

        Ok(Self { a, b })
    }

    /// Decrypts to the message in [0, t).
    ///
    /// Computes b − ⟨a, s⟩, centres into (−q/2, q/2], divides by Δ with
    /// rounding half away from zero, and reduces mod t. Noise beyond the
    /// Δ/2 budget yields a wrong message, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the mask length differs
    /// from the key length.
    pub fn decrypt(&self, sk: &LweSecretKey, params: &Params) -> Result<i64> {
        if self.a.len() != sk.s.len() {
            return Err(HeError::InvalidSize {
                expected: sk.s.len(),
                actual: self.a.len(),
            });
        }

        let q = params.q;
        let inner = ModQ::dot_product(&self.a, &sk.s, q)?;
        let centered = ModQ::center(ModQ::sub(self.b, inner, q), q);
        let rounded = ModQ::round_div(centered, params.delta());

        Ok(rounded.rem_euclid(params.t))
    }

    /// Homomorphic addition: decrypts to (m1 + m2) mod t.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the mask lengths differ.
    pub fn add(&self, other: &Self, params: &Params) -> Result<Self> {
        self.check_dim(other)?;
        let q = params.q;
        let a = self
            .a
            .iter()
            .zip(other.a.iter())
            .map(|(&x, &y)| ModQ::add(x, y, q))
            .collect();
        Ok(Self { a, b: ModQ::add(self.b, other.b, q) })
    }

    /// Homomorphic subtraction: decrypts to (m1 − m2) mod t.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the mask lengths differ.
    pub fn sub(&self, other: &Self, params: &Params) -> Result<Self> {
        self.check_dim(other)?;
        let q = params.q;
        let a = self
            .a
            .iter()
            .zip(other.a.iter())
            .map(|(&x, &y)| ModQ::sub(x, y, q))
            .collect();
        Ok(Self { a, b: ModQ::sub(self.b, other.b, q) })
    }

    /// Scalar multiplication: decrypts to (c·m) mod t while the scaled
    /// noise stays below Δ/2.
    pub fn scalar_mul(&self, scalar: i64, params: &Params) -> Self {
        let q = params.q;
        let a = self.a.iter().map(|&x| ModQ::mul(x, scalar, q)).collect();
        Self { a, b: ModQ::mul(self.b, scalar, q) }
    }

    fn check_dim(&self, other: &Self) -> Result<()> {
        if self.a.len() != other.a.len() {
            return Err(HeError::InvalidSize {
                expected: self.a.len(),
                actual: other.a.len(),
            });
        }
        Ok(())
    }
}

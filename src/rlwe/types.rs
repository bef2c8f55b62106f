//! RLWE ciphertext and key types.

use serde::{Deserialize, Serialize};

use crate::math::Poly;

/// RLWE secret key: a single binary polynomial of length n.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RlweSecretKey {
    /// Secret polynomial with coefficients in {0, 1}.
    pub s: Poly,
}

/// RLWE ciphertext: (a, b) with b = a·s + Δ·m + e (mod q, X^n + 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RlweCiphertext {
    /// Uniform mask polynomial.
    pub a: Poly,
    /// Body polynomial: a·s + Δ·m + e.
    pub b: Poly,
}

impl RlweSecretKey {
    /// Wraps an existing polynomial as a secret key.
    pub fn from_poly(s: Poly) -> Self {
        Self { s }
    }

    /// Ring degree n.
    pub fn ring_dim(&self) -> usize {
        self.s.len()
    }
}

impl RlweCiphertext {
    /// Ring degree n.
    pub fn ring_dim(&self) -> usize {
        self.a.len()
    }
}

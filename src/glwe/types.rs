//! GLWE ciphertext and key types.

use serde::{Deserialize, Serialize};

use crate::math::Poly;

/// GLWE secret key: k binary polynomials of length n.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlweSecretKey {
    /// Secret polynomials s_0 .. s_{k-1}, coefficients in {0, 1}.
    pub s: Vec<Poly>,
}

/// GLWE public key derived from a secret key.
///
/// pk2 is uniform in R_q^k and pk1 = Σ pk2_i·s_i + e with
/// |e coefficients| ≤ B.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlwePublicKey {
    /// pk1 = Σ pk2_i·s_i + e.
    pub pk1: Poly,
    /// Uniform polynomials pk2_0 .. pk2_{k-1}.
    pub pk2: Vec<Poly>,
}

/// GLWE ciphertext: (b, d̃_0 .. d̃_{k-1}) with
/// b − Σ d̃_i·s_i ≡ Δ·m + noise (mod q).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlweCiphertext {
    /// Body polynomial: pk1·u + Δ·m + e1.
    pub b: Poly,
    /// Mask polynomials: d̃_i = pk2_i·u + e2_i.
    pub d_tilde: Vec<Poly>,
}

impl GlweSecretKey {
    /// Module rank k.
    pub fn rank(&self) -> usize {
        self.s.len()
    }
}

impl GlwePublicKey {
    /// Module rank k.
    pub fn rank(&self) -> usize {
        self.pk2.len()
    }
}

impl GlweCiphertext {
    /// Module rank k.
    pub fn rank(&self) -> usize {
        self.d_tilde.len()
    }

    /// Ring degree n.
    pub fn ring_dim(&self) -> usize {
        self.b.len()
    }
}

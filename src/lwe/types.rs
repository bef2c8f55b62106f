//! LWE ciphertext and key types.

use serde::{Deserialize, Serialize};

/// LWE secret key: binary vector of length k.
///
/// k is the LWE security parameter and is independent of the ring
/// degree n used by the polynomial schemes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweSecretKey {
    /// Secret coefficients, each in {0, 1}.
    pub s: Vec<i64>,
}

/// LWE ciphertext: (a, b) with b = ⟨a, s⟩ + Δ·m + e (mod q).
///
/// Every operation on a ciphertext receives the parameter set it was
/// produced under; the ciphertext itself stores only the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweCiphertext {
    /// Mask vector in Z_q^k.
    pub a: Vec<i64>,
    /// Body: ⟨a, s⟩ + Δ·m + e (mod q).
    pub b: i64,
}

impl LweSecretKey {
    /// Key length k.
    pub fn dim(&self) -> usize {
        self.s.len()
    }
}

impl LweCiphertext {
    /// Mask length k.
    pub fn dim(&self) -> usize {
        self.a.len()
    }
}

//! Scheme parameters.
//!
//! A parameter set fixes the polynomial ring, the ciphertext and plaintext
//! moduli, and the noise bound shared by every scheme in the crate. The
//! scaling factor Δ = ⌊q/t⌋ is always derived, never stored.
//!
//! Correctness requires the accumulated decryption noise to stay below
//! Δ/2; parameter selection is the caller's responsibility. The presets
//! below are demonstration sets with generous noise margins, not vetted
//! security levels.
//!
//! # Example
//!
//! ```
//! use lattice_he::params::Params;
//!
//! let params = Params::new(1024, 1 << 32, 256, 8);
//! assert!(params.validate().is_ok());
//! assert_eq!(params.delta(), (1i64 << 32) / 256);
//! ```

use serde::{Deserialize, Serialize};

/// Core parameters shared by all schemes.
///
/// # Fields
///
/// * `n` - Polynomial degree of R_q = Z_q[X]/(X^n + 1). Must be a power
///   of two; may be 0 for parameter sets used only with plain LWE.
/// * `q` - Ciphertext modulus (positive, should exceed `t` comfortably)
/// * `t` - Plaintext modulus (positive; dividing q gives clean scaling)
/// * `noise_bound` - Bound B; noise is uniform over the closed
///   interval [-B, B]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Polynomial degree n (power of two, or 0 for LWE-only use).
    pub n: usize,
    /// Ciphertext modulus q.
    pub q: i64,
    /// Plaintext modulus t.
    pub t: i64,
    /// Noise bound B for uniform sampling over [-B, B].
    pub noise_bound: i64,
}

impl Params {
    /// Creates a parameter set.
    pub fn new(n: usize, q: i64, t: i64, noise_bound: i64) -> Self {
        Self { n, q, t, noise_bound }
    }

    /// Demonstration parameters for scalar LWE (used with k = 256).
    ///
    /// n is 0 because plain LWE never touches the polynomial ring.
    pub fn lwe_demo() -> Self {
        let q = 1 << 30;
        let t = 16;
        Self::new(0, q, t, q / (4 * t))
    }

    /// Demonstration parameters for RLWE with n = 1024.
    pub fn rlwe_demo() -> Self {
        Self::new(1024, 16384, 256, 3)
    }

    /// Demonstration parameters for GLWE/GLev/GGSW with n = 1024
    /// (used with k = 2, β = 16).
    pub fn glwe_demo() -> Self {
        Self::new(1024, 1 << 32, 256, 8)
    }

    /// Computes the scaling factor Δ = ⌊q/t⌋.
    ///
    /// A message m ∈ [0, t) is lifted to Δ·m before encryption, carving
    /// out the high bits of the ciphertext modulus for the signal.
    pub fn delta(&self) -> i64 {
        self.q / self.t
    }

    /// Validates that the parameters satisfy structural constraints.
    ///
    /// Checks that:
    /// - `n` is zero or a power of two (the negacyclic ring needs a
    ///   power of two; zero is allowed for LWE-only sets)
    /// - `q` and `t` are positive and `q >= t`
    /// - `noise_bound` is non-negative
    ///
    /// Validation is advisory: scheme operations do not call it.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.n != 0 && !self.n.is_power_of_two() {
            return Err("n must be zero or a power of two");
        }
        if self.q <= 0 {
            return Err("q must be positive");
        }
        if self.t <= 0 {
            return Err("t must be positive");
        }
        if self.q < self.t {
            return Err("q must be >= t");
        }
        if self.noise_bound < 0 {
            return Err("noise_bound must be non-negative");
        }
        Ok(())
    }
}

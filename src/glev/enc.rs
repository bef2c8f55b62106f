//! GLev encryption and per-level decryption.

use tracing::debug;

use crate::error::{HeError, Result};
use crate::glwe::{GlweCiphertext, GlwePublicKey, GlweSecretKey};
use crate::math::{Poly, RingMul, Sampler};
use crate::params::Params;

use super::types::GlevCiphertext;

/// Scaling factor for one level: ⌊q / (β·β^level)⌋, clamped to 1.
///
/// Shared by the encrypt and decrypt paths below — the factor written
/// into a level at encryption must be reproduced bit-for-bit at
/// decryption or rounding recovers garbage. The denominator is built in
/// saturating i128, so levels deep enough to exhaust the modulus all
/// clamp to 1 rather than wrapping.
pub(crate) fn level_delta(q: i64, base: i64, level: usize) -> i64 {
    let mut denom = base as i128;
    for _ in 0..level {
        denom = denom.saturating_mul(base as i128);
    }
    let delta = q as i128 / denom;
    if delta == 0 {
        1
    } else {
        delta as i64
    }
}

impl GlevCiphertext {
    /// Encrypts the message at every level j ∈ [0, l].
    ///
    /// Each level runs the GLWE encryption procedure on the pre-scaled
    /// value Δ_j·m (mod q) — the scaled polynomial is signed directly
    /// rather than re-applying q/t — with fresh u, e1, e2 per level.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the message length differs
    /// from n.
    pub fn encrypt(
        message: &Poly,
        pk: &GlwePublicKey,
        params: &Params,
        l: usize,
        base: i64,
        ring: &dyn RingMul,
        sampler: &mut Sampler,
    ) -> Result<Self> {
        if message.len() != params.n {
            return Err(HeError::InvalidSize {
                expected: params.n,
                actual: message.len(),
            });
        }
        debug!(l, base, "encrypting GLev ciphertext");

        let mut levels = Vec::with_capacity(l + 1);
        for j in 0..=l {
            let scaled_m = message.scalar_mul(level_delta(params.q, base, j));
            levels.push(GlweCiphertext::encrypt_scaled(
                &scaled_m, pk, params, ring, sampler,
            )?);
        }

        Ok(Self { levels })
    }

    /// Decrypts the chosen level back to the message.
    ///
    /// Rebuilds Δ_level by the same formula used at encryption and runs
    /// the GLWE decryption phase with it.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::LevelOutOfRange`] when `level` exceeds the
    /// highest stored level, and [`HeError::InvalidSize`] when the
    /// ciphertext dimensions disagree with the key.
    pub fn decrypt_level(
        &self,
        sk: &GlweSecretKey,
        params: &Params,
        level: usize,
        base: i64,
        ring: &dyn RingMul,
    ) -> Result<Poly> {
        if level >= self.levels.len() {
            return Err(HeError::LevelOutOfRange {
                index: level,
                max: self.levels.len().saturating_sub(1),
            });
        }

        let delta = level_delta(params.q, base, level);
        self.levels[level].decrypt_with_delta(sk, params, delta, ring)
    }
}

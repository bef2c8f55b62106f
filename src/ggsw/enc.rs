//! GGSW encryption and final-row decryption.

use tracing::debug;

use crate::error::{HeError, Result};
use crate::glev::GlevCiphertext;
use crate::glwe::{GlwePublicKey, GlweSecretKey};
use crate::math::{Poly, RingMul, Sampler};
use crate::params::Params;

use super::types::GgswCiphertext;

impl GgswCiphertext {
    /// Encrypts m as k+1 GLev rows: GLev(−s_i·m) for i < k, then
    /// GLev(m).
    ///
    /// All rows are public-key GLev encryptions; the secret key is
    /// needed only to form the row messages −s_i·m.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the message length differs
    /// from n.
    pub fn encrypt(
        message: &Poly,
        pk: &GlwePublicKey,
        sk: &GlweSecretKey,
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
        debug!(k = sk.rank(), l, base, "encrypting GGSW ciphertext");

        let mut rows = Vec::with_capacity(sk.rank() + 1);
        for s_i in &sk.s {
            let neg_si_m = ring.negacyclic_mul(s_i, message)?.negate();
            rows.push(GlevCiphertext::encrypt(
                &neg_si_m, pk, params, l, base, ring, sampler,
            )?);
        }
        rows.push(GlevCiphertext::encrypt(
            message, pk, params, l, base, ring, sampler,
        )?);

        Ok(Self { rows })
    }

    /// Decrypts the chosen level of the final GLev row, recovering m.
    ///
    /// The −s_i·m rows are not decryptable to anything meaningful on
    /// their own; they exist for the external product.
    ///
    /// # Errors
    ///
    /// Returns [`HeError::InvalidSize`] when the row count differs from
    /// k+1, and [`HeError::LevelOutOfRange`] when `level` exceeds the
    /// highest stored level.
    pub fn decrypt(
        &self,
        sk: &GlweSecretKey,
        params: &Params,
        level: usize,
        base: i64,
        ring: &dyn RingMul,
    ) -> Result<Poly> {
        if self.rows.len() != sk.rank() + 1 {
            return Err(HeError::InvalidSize {
                expected: sk.rank() + 1,
                actual: self.rows.len(),
            });
        }

        self.rows[self.rows.len() - 1].decrypt_level(sk, params, level, base, ring)
    }
}

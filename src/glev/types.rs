//! GLev ciphertext type.

use serde::{Deserialize, Serialize};

use crate::glwe::GlweCiphertext;

/// GLev ciphertext: GLWE encryptions of one message at levels 0..=l.
///
/// Level j encrypts the message under Δ_j = ⌊q / (β·β^j)⌋; the same
/// formula is reapplied at decryption, so β must travel with the
/// ciphertext out of band (it is a caller-held parameter, not stored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlevCiphertext {
    /// One GLWE ciphertext per level, index 0 first.
    pub levels: Vec<GlweCiphertext>,
}

impl GlevCiphertext {
    /// Number of stored levels (l + 1).
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }
}

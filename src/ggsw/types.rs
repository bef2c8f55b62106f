//! GGSW ciphertext type.

use serde::{Deserialize, Serialize};

use crate::glev::GlevCiphertext;

/// GGSW ciphertext: k+1 GLev rows.
///
/// Rows 0..k encrypt −s_i·m, row k encrypts m.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GgswCiphertext {
    /// GLev rows, final row last.
    pub rows: Vec<GlevCiphertext>,
}

impl GgswCiphertext {
    /// Number of rows (k + 1).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

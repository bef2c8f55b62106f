//! GGSW: a matrix of GLev ciphertexts encoding m and −s_i·m.
//!
//! Row i < k is GLev(−s_i·m); row k is GLev(m). The extra rows are what
//! make GGSW the operand of the FHE external product; this crate keeps
//! them but only exposes decryption of the final row, which recovers m
//! itself. Because the first k messages involve the secret key,
//! encryption consumes both the public and the secret key.

mod enc;
mod types;

pub use types::GgswCiphertext;

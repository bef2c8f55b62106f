//! GLWE (module-LWE) encryption under a public key.
//!
//! The secret key is k binary polynomials; the public key is
//! (pk1, pk2_0..pk2_{k-1}) with pk1 = Σ pk2_i·s_i + e. Encryption is
//! public-key: fresh binary u and noise (e1, e2_i) produce
//! b = pk1·u + Δ·m + e1 and d̃_i = pk2_i·u + e2_i, so that
//! b − Σ d̃_i·s_i ≡ Δ·m + noise.

mod enc;
mod types;

pub use types::{GlweCiphertext, GlwePublicKey, GlweSecretKey};

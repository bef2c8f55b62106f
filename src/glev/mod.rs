//! GLev: layered GLWE encryption at geometric precision levels.
//!
//! A GLev ciphertext is l+1 GLWE ciphertexts of the same message, where
//! level j carries the message under the scaling factor
//! Δ_j = ⌊q / (β·β^j)⌋ (clamped to 1). Decomposition base β and depth l
//! are the knobs; each level draws independent fresh randomness.

mod enc;
mod types;

pub use types::GlevCiphertext;

//! Scalar LWE encryption.
//!
//! Hides a message m ∈ [0, t) as b = ⟨a, s⟩ + Δ·m + e for a uniform
//! vector a, binary secret s, and noise |e| ≤ B.

mod enc;
mod types;

pub use types::{LweCiphertext, LweSecretKey};

//! Ring-LWE encryption over R_q = Z_q[X]/(X^n + 1).
//!
//! Encrypts a whole message polynomial at once: b = a·s + Δ·m + e for a
//! uniform polynomial a, binary secret polynomial s, and noise
//! polynomial e with coefficients in [-B, B].

mod enc;
mod types;

pub use types::{RlweCiphertext, RlweSecretKey};

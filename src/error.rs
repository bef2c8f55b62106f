//! Error types for the encryption schemes.
//!
//! The error set is closed: dimension disagreements, out-of-range scalar
//! messages, and out-of-range level indices. Decryption under excessive
//! noise is *not* an error — it silently yields a wrong message, and the
//! caller is responsible for choosing parameters that keep the noise
//! below Δ/2.

use thiserror::Error;

/// All errors that the scheme operations can return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeError {
    /// Dimensions of two operands disagree, or a ciphertext's k/n
    /// disagrees with a key's.
    #[error("operand size mismatch: expected {expected}, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    /// A scalar LWE message lies outside the plaintext range [0, t).
    #[error("message {0} outside plaintext range")]
    InvalidMessage(i64),

    /// A level index passed to GLev/GGSW decryption is not in [0, l].
    #[error("level index {index} out of range (max {max})")]
    LevelOutOfRange { index: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, HeError>;

//! lattice-he: didactic lattice-based homomorphic encryption.
//!
//! This crate implements the family of encryption schemes built on the
//! Learning-With-Errors problem and its ring and module variants, together
//! with the layered ciphertexts used as building blocks of fully
//! homomorphic encryption:
//!
//! - **LWE**: scalar messages hidden behind a random inner product
//! - **RLWE**: polynomial messages over R_q = Z_q[X]/(X^n + 1)
//! - **GLWE**: module-LWE encryption under a public key of k polynomials
//! - **GLev**: a vector of GLWE ciphertexts at geometrically scaled
//!   precision levels, parameterised by a base β and depth l
//! - **GGSW**: a (k+1)-row matrix of GLev ciphertexts encoding a message
//!   together with its products with each secret-key polynomial
//!
//! Each scheme supports key generation, encryption, decryption, and the
//! homomorphic operators that preserve its invariant (addition,
//! subtraction, scalar multiplication).
//!
//! The negacyclic polynomial product is pluggable through the
//! [`RingMul`](math::RingMul) trait: [`SchoolbookMul`](math::SchoolbookMul)
//! works for any modulus, [`NttRing`](math::NttRing) is the O(n log n)
//! alternative for NTT-friendly prime moduli.
//!
//! # Example
//!
//! ```
//! use lattice_he::math::Sampler;
//! use lattice_he::params::Params;
//! use lattice_he::lwe::{LweCiphertext, LweSecretKey};
//!
//! let params = Params::new(0, 1 << 30, 16, 1 << 22);
//! let mut sampler = Sampler::with_seed(7);
//! let sk = LweSecretKey::generate(256, &mut sampler);
//!
//! let ct = LweCiphertext::encrypt(5, &sk, &params, &mut sampler).unwrap();
//! assert_eq!(ct.decrypt(&sk, &params).unwrap(), 5);
//! ```

pub mod error;
pub mod params;
pub mod math;
pub mod lwe;
pub mod rlwe;
pub mod glwe;
pub mod glev;
pub mod ggsw;

pub use error::{HeError, Result};
pub use math::{NttRing, Poly, RingMul, Sampler, SchoolbookMul};
pub use params::Params;

pub use ggsw::GgswCiphertext;
pub use glev::GlevCiphertext;
pub use glwe::{GlweCiphertext, GlwePublicKey, GlweSecretKey};
pub use lwe::{LweCiphertext, LweSecretKey};
pub use rlwe::{RlweCiphertext, RlweSecretKey};

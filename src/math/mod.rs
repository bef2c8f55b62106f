//! Mathematical primitives for the encryption schemes.
//!
//! This module provides the arithmetic layer everything else is built on:
//!
//! - **Modular arithmetic** over Z_q with centered representatives
//! - **Polynomials** over R_q = Z_q[X]/(X^n + 1) with coefficient-wise ops
//! - **Negacyclic multiplication** behind the [`RingMul`] trait, with a
//!   schoolbook reference implementation and an NTT-based one
//! - **Sampling** of uniform, binary, and bounded-uniform values

pub mod modular;
pub mod ntt;
pub mod poly;
pub mod ring;
pub mod sampler;

pub use modular::ModQ;
pub use ntt::NttRing;
pub use poly::Poly;
pub use ring::{RingMul, SchoolbookMul};
pub use sampler::Sampler;

//! # numerus-modular
//!
//! Modular-arithmetic helpers over arbitrary precision integers: a
//! Chinese Remainder Theorem solver and a Fermat-little-theorem modular
//! inverse.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crt;
pub mod inverse;

use thiserror::Error;

pub use crt::chinese_remainder_theorem;
pub use inverse::mod_inverse_fermat;

/// Errors from the modular-arithmetic helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModularError {
    /// The residue and modulus sequences have different lengths.
    #[error("length mismatch: {residues} residues against {moduli} moduli")]
    LengthMismatch {
        /// Number of residues supplied.
        residues: usize,
        /// Number of moduli supplied.
        moduli: usize,
    },

    /// Two moduli share a factor, so no unique solution exists.
    #[error("moduli are not pairwise coprime")]
    ModuliNotCoprime,

    /// The Fermat inverse requires `a > 0` and `modulus > 1`.
    #[error("modular inverse requires a > 0 and modulus > 1")]
    InvalidArgument,
}

//! # Numerus
//!
//! A number-theory toolkit over arbitrary precision integers.
//!
//! Numerus provides probabilistic primality testing, integer
//! factorization, modular arithmetic and positional base encoding, with
//! the raw big-integer arithmetic delegated to `dashu`.
//!
//! ## Features
//!
//! - **Primality**: Fermat, Miller-Rabin and Solovay-Strassen tests, a
//!   Jacobi symbol, and a secure prime generator
//! - **Factorization**: small-prime sieve, trial division and Pollard's
//!   rho, composed into a complete factorizer
//! - **Modular arithmetic**: Chinese Remainder Theorem and a Fermat
//!   modular inverse
//! - **Base encoding**: bases 2, 8, 10, 16 and 32 plus padded Base64
//!
//! Every probabilistic operation takes its random source as an explicit
//! `rand::Rng` argument; seed a `ChaCha8Rng` for reproducible runs or
//! pass `OsRng` in production.
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let n = Integer::new(561);
//! assert!(!is_probable_prime_miller_rabin(&n, 20, &mut rng));
//!
//! let factors = factor(&n, &mut rng).unwrap();
//! assert_eq!(factors.len(), 3); // 3 * 11 * 17
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_factor as factor;
pub use numerus_integers as integers;
pub use numerus_modular as modular;
pub use numerus_primality as primality;
pub use numerus_radix as radix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_factor::{factor, pollards_rho, FactorError, RhoResult};
    pub use numerus_integers::{random, Integer};
    pub use numerus_modular::{chinese_remainder_theorem, mod_inverse_fermat, ModularError};
    pub use numerus_primality::{
        generate_prime, generate_prime_in_range, is_probable_prime_fermat,
        is_probable_prime_miller_rabin, is_probable_prime_solovay_strassen, jacobi_symbol,
        miller_rabin_test, GenerateError, MILLER_RABIN_ROUNDS,
    };
    pub use numerus_radix::{
        convert_base, convert_from_base, convert_from_base64, convert_to_base, convert_to_base64,
        RadixError,
    };
}

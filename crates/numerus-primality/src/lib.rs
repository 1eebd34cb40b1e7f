//! # numerus-primality
//!
//! Probabilistic primality testing for arbitrary precision integers.
//!
//! Three independent tests are provided — Fermat, Miller-Rabin and
//! Solovay-Strassen — together with the Jacobi symbol they build on and a
//! Miller-Rabin-backed prime generator.
//!
//! Every probabilistic function takes its random source as an explicit
//! `rand::Rng` parameter. The generator path additionally requires
//! `rand::CryptoRng`; the recommended tier is cryptographically secure
//! throughout (`rand::rngs::OsRng` in production, a seeded `ChaCha8Rng`
//! for deterministic tests).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fermat;
pub mod generate;
pub mod jacobi;
pub mod miller_rabin;
pub mod solovay_strassen;

pub use fermat::is_probable_prime_fermat;
pub use generate::{
    generate_prime, generate_prime_in_range, miller_rabin_test, GenerateError,
    MILLER_RABIN_ROUNDS,
};
pub use jacobi::jacobi_symbol;
pub use miller_rabin::is_probable_prime_miller_rabin;
pub use solovay_strassen::is_probable_prime_solovay_strassen;

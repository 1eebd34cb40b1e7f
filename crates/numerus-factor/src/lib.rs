//! # numerus-factor
//!
//! Integer factorization built from three layers: a small-prime sieve,
//! trial division, and Pollard's rho cycle detection for what the sieve
//! leaves behind. [`factor`] composes all three and returns the prime
//! factors in ascending order with multiplicity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factor;
pub mod rho;
pub mod sieve;

pub use factor::{factor, FactorError};
pub use rho::{pollards_rho, RhoResult};
pub use sieve::{eratosthenes_primes, SIEVE_LIMIT};

//! Prime generation backed by Miller-Rabin.
//!
//! This is the production path: witnesses and candidates are drawn from a
//! cryptographically secure source, which the `CryptoRng` bound makes a
//! compile-time requirement rather than a convention.

use numerus_integers::{random, Integer};
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::miller_rabin::{decompose, witness_passes};

/// Default witness count for the generator path.
pub const MILLER_RABIN_ROUNDS: u32 = 20;

/// Errors from the prime generators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A prime of zero bits was requested.
    #[error("bit length must be positive")]
    InvalidBitLength,

    /// The requested range `[start, stop)` contains nothing.
    #[error("empty range: start must be below stop")]
    EmptyRange,
}

/// Miller-Rabin test drawing `rounds` witnesses from a secure source.
///
/// Same strong pseudoprime condition as
/// [`crate::is_probable_prime_miller_rabin`], with the generator-path
/// guards: `n <= 1` and `n = 4` are composite, `n <= 3` prime.
#[must_use]
pub fn miller_rabin_test<R: Rng + CryptoRng + ?Sized>(
    n: &Integer,
    rounds: u32,
    rng: &mut R,
) -> bool {
    if n <= &Integer::new(1) || n == &Integer::new(4) {
        return false;
    }
    if n <= &Integer::new(3) {
        return true;
    }

    let n_minus_one = n - &Integer::new(1);
    let (d, r) = decompose(&n_minus_one);
    for _ in 0..rounds {
        let a = random::random_in_range(rng, &Integer::new(2), &n_minus_one);
        if !witness_passes(&a, &d, r, n) {
            return false;
        }
    }
    true
}

/// Generates a probable prime below `2^bits`.
///
/// Candidates are sampled uniformly and retried until one passes
/// [`miller_rabin_test`] at [`MILLER_RABIN_ROUNDS`].
///
/// # Errors
///
/// Returns [`GenerateError::InvalidBitLength`] when `bits` is zero.
pub fn generate_prime<R: Rng + CryptoRng + ?Sized>(
    bits: usize,
    rng: &mut R,
) -> Result<Integer, GenerateError> {
    if bits == 0 {
        return Err(GenerateError::InvalidBitLength);
    }
    loop {
        let candidate = random::random_bits(rng, bits);
        if miller_rabin_test(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return Ok(candidate);
        }
    }
}

/// Generates a probable prime in `[start, stop)`.
///
/// Each candidate has its low bit forced so only odd values are tested;
/// a forced candidate that escapes the range is resampled.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyRange`] when `start >= stop`.
pub fn generate_prime_in_range<R: Rng + CryptoRng + ?Sized>(
    start: &Integer,
    stop: &Integer,
    rng: &mut R,
) -> Result<Integer, GenerateError> {
    if start >= stop {
        return Err(GenerateError::EmptyRange);
    }
    loop {
        let mut candidate = random::random_in_range(rng, start, stop);
        if candidate.is_even() {
            candidate = candidate + Integer::new(1);
        }
        if &candidate >= stop {
            continue;
        }
        if miller_rabin_test(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return Ok(candidate);
        }
    }
}

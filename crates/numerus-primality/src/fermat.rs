//! The Fermat primality test.

use numerus_integers::{random, Integer};
use rand::Rng;

/// Fermat probabilistic primality test with `rounds` random witnesses.
///
/// Each witness `a` is drawn uniformly from `[2, n-2]`; any witness with
/// `a^(n-1) mod n != 1` proves `n` composite. A `true` answer is only
/// probable: Carmichael numbers such as 561 satisfy Fermat's little
/// theorem for every witness coprime to them and are reported prime
/// whenever no shared-factor witness is drawn. Use
/// [`crate::is_probable_prime_miller_rabin`] when that matters.
#[must_use]
pub fn is_probable_prime_fermat<R: Rng + ?Sized>(n: &Integer, rounds: u32, rng: &mut R) -> bool {
    let one = Integer::new(1);
    if n <= &one {
        return false;
    }
    if n == &Integer::new(2) || n == &Integer::new(3) {
        return true;
    }

    let n_minus_one = n - &one;
    for _ in 0..rounds {
        // [2, n-2] inclusive is [2, n-1) for the half-open sampler.
        let a = random::random_in_range(rng, &Integer::new(2), &n_minus_one);
        if a.modpow(&n_minus_one, n) != one {
            return false;
        }
    }
    true
}

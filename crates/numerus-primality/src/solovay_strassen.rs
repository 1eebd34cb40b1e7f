//! The Solovay-Strassen primality test.

use numerus_integers::{random, Integer};
use rand::Rng;

use crate::jacobi::jacobi_symbol;

/// Solovay-Strassen probabilistic primality test with `rounds` witnesses.
///
/// For each witness `a` drawn uniformly from `[1, n-1]`, `n` is proved
/// composite when `gcd(a, n) > 1` or when the Jacobi symbol `J(a, n)`,
/// reduced modulo `n`, differs from the Euler criterion power
/// `a^((n-1)/2) mod n`.
#[must_use]
pub fn is_probable_prime_solovay_strassen<R: Rng + ?Sized>(
    n: &Integer,
    rounds: u32,
    rng: &mut R,
) -> bool {
    let one = Integer::new(1);
    if n <= &one {
        return false;
    }
    if n == &Integer::new(2) || n == &Integer::new(3) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n_minus_one = n - &one;
    let exponent = &n_minus_one / &Integer::new(2);
    for _ in 0..rounds {
        let a = random::random_in_range(rng, &one, n);
        if a.gcd(n) > one {
            return false;
        }
        let jacobi = Integer::new(i64::from(jacobi_symbol(&a, n))).rem_euclid(n);
        if a.modpow(&exponent, n) != jacobi {
            return false;
        }
    }
    true
}

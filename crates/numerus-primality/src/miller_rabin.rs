//! The Miller-Rabin strong pseudoprime test.

use num_traits::Zero;
use numerus_integers::{random, Integer};
use rand::Rng;

/// Miller-Rabin probabilistic primality test with `rounds` random witnesses.
///
/// Writes `n - 1 = d * 2^r` with `d` odd and checks each witness against
/// the strong pseudoprime condition. A composite survives one witness with
/// probability at most 1/4, so `rounds` of 10-20 make a false positive
/// negligible; `false` is always correct.
#[must_use]
pub fn is_probable_prime_miller_rabin<R: Rng + ?Sized>(
    n: &Integer,
    rounds: u32,
    rng: &mut R,
) -> bool {
    let two = Integer::new(2);
    if n < &two {
        return false;
    }
    if n == &two || n == &Integer::new(3) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n_minus_one = n - &Integer::new(1);
    let (d, r) = decompose(&n_minus_one);
    for _ in 0..rounds {
        let a = random::random_in_range(rng, &two, &n_minus_one);
        if !witness_passes(&a, &d, r, n) {
            return false;
        }
    }
    true
}

/// Splits an even `m` as `d * 2^r` with `d` odd.
pub(crate) fn decompose(m: &Integer) -> (Integer, u32) {
    let two = Integer::new(2);
    let mut d = m.clone();
    let mut r = 0u32;
    while !d.is_zero() && d.is_even() {
        d = d / &two;
        r += 1;
    }
    (d, r)
}

/// One Miller-Rabin pass: does witness `a` leave `n` possibly prime?
pub(crate) fn witness_passes(a: &Integer, d: &Integer, r: u32, n: &Integer) -> bool {
    let one = Integer::new(1);
    let n_minus_one = n - &one;

    let mut x = a.modpow(d, n);
    if x == one || x == n_minus_one {
        return true;
    }
    for _ in 1..r {
        x = (&x * &x).rem_euclid(n);
        if x == n_minus_one {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_accepts_primes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for p in [2i64, 3, 5, 7, 104_729] {
            assert!(
                is_probable_prime_miller_rabin(&Integer::new(p), 10, &mut rng),
                "{p} is prime"
            );
        }
    }

    #[test]
    fn test_rejects_composites() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for c in [4i64, 6, 8, 9, 15, 341, 1105] {
            assert!(
                !is_probable_prime_miller_rabin(&Integer::new(c), 10, &mut rng),
                "{c} is composite"
            );
        }
    }

    #[test]
    fn test_rejects_carmichael_561() {
        // 561 = 3 * 11 * 17 defeats the plain Fermat test but not this one.
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        assert!(!is_probable_prime_miller_rabin(
            &Integer::new(561),
            10,
            &mut rng
        ));
    }

    #[test]
    fn test_rejects_below_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        assert!(!is_probable_prime_miller_rabin(&Integer::new(1), 10, &mut rng));
        assert!(!is_probable_prime_miller_rabin(&Integer::new(0), 10, &mut rng));
        assert!(!is_probable_prime_miller_rabin(&Integer::new(-3), 10, &mut rng));
    }

    #[test]
    fn test_large_prime() {
        // 2^61 - 1 is a Mersenne prime.
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let p = Integer::new((1 << 61) - 1);
        assert!(is_probable_prime_miller_rabin(&p, 10, &mut rng));
    }

    #[test]
    fn test_decompose() {
        // 560 = 35 * 2^4
        let (d, r) = decompose(&Integer::new(560));
        assert_eq!(d, Integer::new(35));
        assert_eq!(r, 4);
    }
}

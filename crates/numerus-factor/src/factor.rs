//! Complete factorization into a sorted prime multiset.

use num_traits::Zero;
use numerus_integers::Integer;
use numerus_primality::{miller_rabin_test, MILLER_RABIN_ROUNDS};
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::rho::{pollards_rho, RhoResult};
use crate::sieve::{eratosthenes_primes, SIEVE_LIMIT};

/// Errors from [`factor`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactorError {
    /// Factorization is only defined for positive integers.
    #[error("cannot factor non-positive integer {0}")]
    NonPositive(Integer),

    /// Pollard's rho collapsed its cycle without splitting the remainder.
    /// The unfactored cofactor is attached; retrying with a different
    /// seed may split it.
    #[error("Pollard's rho cycle collapsed without splitting {0}")]
    CycleCollapsed(Integer),

    /// Pollard's rho ran out of iterations on the attached remainder.
    #[error("Pollard's rho iteration budget exhausted on {0}")]
    Exhausted(Integer),
}

/// Factors `n` into primes, ascending, with multiplicity.
///
/// Small primes are divided out by trial division against the sieve up to
/// [`SIEVE_LIMIT`]; any surviving cofactor goes onto a worklist that is
/// either certified probably-prime (Miller-Rabin at
/// [`MILLER_RABIN_ROUNDS`], drawing witnesses from `rng`) or split by
/// Pollard's rho with seed 2. The product of the returned factors equals
/// `n`.
///
/// # Errors
///
/// [`FactorError::NonPositive`] for `n < 1`, and the rho failure variants
/// when a cofactor cannot be split.
pub fn factor<R: Rng + CryptoRng + ?Sized>(
    n: &Integer,
    rng: &mut R,
) -> Result<Vec<Integer>, FactorError> {
    let one = Integer::new(1);
    if n < &one {
        return Err(FactorError::NonPositive(n.clone()));
    }

    let mut factors = Vec::new();
    let mut remaining = n.clone();

    for p in eratosthenes_primes(SIEVE_LIMIT) {
        if remaining == one {
            break;
        }
        let p = Integer::from(p);
        loop {
            let (q, r) = remaining.div_rem(&p);
            if !r.is_zero() {
                break;
            }
            factors.push(p.clone());
            remaining = q;
        }
    }

    if remaining > one {
        // Worklist instead of recursion; depth is bounded by the factor
        // count, not the call stack.
        let mut pending = vec![remaining];
        while let Some(m) = pending.pop() {
            if m == one {
                continue;
            }
            if miller_rabin_test(&m, MILLER_RABIN_ROUNDS, rng) {
                factors.push(m);
                continue;
            }
            match pollards_rho(&m, &Integer::new(2), None) {
                RhoResult::Found(d) => {
                    let cofactor = &m / &d;
                    pending.push(d);
                    pending.push(cofactor);
                }
                RhoResult::CycleCollapsed => return Err(FactorError::CycleCollapsed(m)),
                RhoResult::Exhausted => return Err(FactorError::Exhausted(m)),
            }
        }
    }

    factors.sort();
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn ints(values: &[i64]) -> Vec<Integer> {
        values.iter().map(|&v| Integer::new(v)).collect()
    }

    #[test]
    fn test_factor_360() {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let factors = factor(&Integer::new(360), &mut rng).unwrap();
        assert_eq!(factors, ints(&[2, 2, 2, 3, 3, 5]));
    }

    #[test]
    fn test_factor_one_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(factor(&Integer::new(1), &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_factor_prime() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let factors = factor(&Integer::new(104_729), &mut rng).unwrap();
        assert_eq!(factors, ints(&[104_729]));
    }

    #[test]
    fn test_factor_beyond_sieve() {
        // 1_299_709 is the 100_000th prime; square it to force rho.
        let mut rng = ChaCha8Rng::seed_from_u64(44);
        let p = Integer::new(1_299_709);
        let n = &p * &p;
        let factors = factor(&n, &mut rng).unwrap();
        assert_eq!(factors, vec![p.clone(), p]);
    }

    #[test]
    fn test_factor_mixed_magnitudes() {
        // 2^3 * 3 * 104729 * 104729
        let mut rng = ChaCha8Rng::seed_from_u64(45);
        let big = Integer::new(104_729);
        let n = Integer::new(24) * &big * &big;
        let factors = factor(&n, &mut rng).unwrap();

        assert_eq!(
            factors,
            ints(&[2, 2, 2, 3, 104_729, 104_729])
        );

        let product = factors
            .into_iter()
            .fold(Integer::new(1), |acc, f| acc * f);
        assert_eq!(product, n);
    }

    #[test]
    fn test_factor_rejects_non_positive() {
        let mut rng = ChaCha8Rng::seed_from_u64(46);
        assert_eq!(
            factor(&Integer::new(0), &mut rng),
            Err(FactorError::NonPositive(Integer::new(0)))
        );
        assert_eq!(
            factor(&Integer::new(-6), &mut rng),
            Err(FactorError::NonPositive(Integer::new(-6)))
        );
    }
}

//! The Jacobi symbol.

use numerus_integers::Integer;

/// Computes the Jacobi symbol `J(a, n)` for odd positive `n`.
///
/// Returns -1, 0 or 1. The computation recurses on the standard identities:
/// reduction of `a` modulo `n`, extraction of factors of two via the
/// `n mod 8` rule, and quadratic reciprocity for the odd-odd step.
#[must_use]
pub fn jacobi_symbol(a: &Integer, n: &Integer) -> i8 {
    let zero = Integer::new(0);
    let one = Integer::new(1);

    if a == &zero {
        return i8::from(n == &one);
    }
    if a == &Integer::new(-1) {
        return if n.is_even() { 1 } else { -1 };
    }
    if a == &one {
        return 1;
    }
    if a == &Integer::new(2) {
        return match small_mod(n, 8) {
            1 | 7 => 1,
            3 | 5 => -1,
            _ => 0,
        };
    }
    if a >= n {
        return jacobi_symbol(&a.rem_euclid(n), n);
    }
    if a.is_even() {
        let half = a / &Integer::new(2);
        return jacobi_symbol(&Integer::new(2), n) * jacobi_symbol(&half, n);
    }
    // Odd a below n: quadratic reciprocity.
    if small_mod(a, 4) == 3 && small_mod(n, 4) == 3 {
        -jacobi_symbol(n, a)
    } else {
        jacobi_symbol(n, a)
    }
}

fn small_mod(value: &Integer, modulus: i64) -> i64 {
    value
        .rem_euclid(&Integer::new(modulus))
        .to_i64()
        .expect("reduced value fits in i64")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jacobi(a: i64, n: i64) -> i8 {
        jacobi_symbol(&Integer::new(a), &Integer::new(n))
    }

    #[test]
    fn test_unit_cases() {
        assert_eq!(jacobi(0, 1), 1);
        assert_eq!(jacobi(0, 3), 0);
        assert_eq!(jacobi(1, 9), 1);
    }

    #[test]
    fn test_two_rule() {
        // J(2, n) depends only on n mod 8
        assert_eq!(jacobi(2, 17), 1); // 17 ≡ 1 (mod 8)
        assert_eq!(jacobi(2, 7), 1); // 7 ≡ 7 (mod 8)
        assert_eq!(jacobi(2, 3), -1); // 3 ≡ 3 (mod 8)
        assert_eq!(jacobi(2, 5), -1); // 5 ≡ 5 (mod 8)
    }

    #[test]
    fn test_known_values() {
        // Legendre symbols modulo the prime 7: squares are {1, 2, 4}
        assert_eq!(jacobi(1, 7), 1);
        assert_eq!(jacobi(2, 7), 1);
        assert_eq!(jacobi(3, 7), -1);
        assert_eq!(jacobi(4, 7), 1);
        assert_eq!(jacobi(5, 7), -1);
        assert_eq!(jacobi(6, 7), -1);

        // Composite lower argument
        assert_eq!(jacobi(1001, 9907), -1);
        assert_eq!(jacobi(19, 45), 1);
        assert_eq!(jacobi(8, 21), -1);
        assert_eq!(jacobi(5, 21), 1);
    }

    #[test]
    fn test_reduction() {
        // J(a, n) = J(a mod n, n)
        assert_eq!(jacobi(30, 7), jacobi(2, 7));
        assert_eq!(jacobi(1000, 33), jacobi(1000 % 33, 33));
    }

    #[test]
    fn test_shared_factor_is_zero() {
        assert_eq!(jacobi(6, 9), 0);
        assert_eq!(jacobi(15, 25), 0);
    }
}

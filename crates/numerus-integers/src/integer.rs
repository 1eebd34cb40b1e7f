//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::Integer` with the
//! modular-arithmetic operations the rest of the toolkit is built on.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the operations needed for
/// primality testing, factorization and modular arithmetic. Values are
/// immutable; every operation returns a new integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Creates a non-negative integer from big-endian bytes.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(IBig::from(UBig::from_be_bytes(bytes)))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is divisible by two.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.0.clone() % IBig::from(2) == IBig::ZERO
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the extended greatest common divisor.
    ///
    /// Returns `(g, x, y)` such that `self * x + other * y = g`.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        let mut old_t = Self::zero();
        let mut t = Self::one();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r);
            old_r = r;
            r = rem;

            let new_s = old_s.clone() - q.clone() * s.clone();
            old_s = s;
            s = new_s;

            let new_t = old_t.clone() - q * t.clone();
            old_t = t;
            t = new_t;
        }

        (old_r, old_s, old_t)
    }

    /// Computes quotient and remainder in one step.
    ///
    /// The remainder carries the sign of `self`, like the engine's `%`.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = Self(self.0.clone() / other.0.clone());
        let r = Self(self.0.clone() % other.0.clone());
        (q, r)
    }

    /// Reduces `self` into `[0, |modulus|)`.
    #[must_use]
    pub fn rem_euclid(&self, modulus: &Self) -> Self {
        let r = Self(self.0.clone() % modulus.0.clone());
        if r.is_negative() {
            r + modulus.abs()
        } else {
            r
        }
    }

    /// Computes the modular inverse of `self` modulo `modulus`.
    ///
    /// Returns `None` if the inverse doesn't exist, i.e. when
    /// `gcd(self, modulus) != 1`.
    #[must_use]
    pub fn mod_inverse(&self, modulus: &Self) -> Option<Self> {
        let reduced = self.rem_euclid(modulus);
        let (g, x, _) = reduced.extended_gcd(modulus);
        if g.is_one() {
            Some(x.rem_euclid(modulus))
        } else {
            None
        }
    }

    /// Computes `self^exponent mod modulus` by square-and-multiply.
    ///
    /// Every intermediate is reduced into `[0, modulus)`, so the result is
    /// exact for arbitrarily large operands.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is negative or `modulus` is not positive.
    #[must_use]
    pub fn modpow(&self, exponent: &Self, modulus: &Self) -> Self {
        assert!(!exponent.is_negative(), "exponent must be non-negative");
        assert!(modulus > &Self::zero(), "modulus must be positive");

        let two = Self::new(2);
        let mut base = self.rem_euclid(modulus);
        let mut exp = exponent.clone();
        let mut result = Self::one().rem_euclid(modulus);

        while !exp.is_zero() {
            if !exp.is_even() {
                result = (&result * &base).rem_euclid(modulus);
            }
            base = (&base * &base).rem_euclid(modulus);
            exp = exp / two.clone();
        }

        result
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    fn div(self, rhs: &Integer) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Rem<&Integer> for Integer {
    type Output = Self;

    fn rem(self, rhs: &Integer) -> Self::Output {
        Self(self.0 % &rhs.0)
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        Integer(&self.0 % &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(value as i64)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

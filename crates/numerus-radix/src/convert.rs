//! Positional encode/decode between integers and digit strings.

use num_traits::Zero;
use numerus_integers::Integer;
use thiserror::Error;

use crate::alphabet::{alphabet_for_base, BASE64_ALPHABET};

/// Base64 output is padded with `=` to a multiple of this block size.
const BASE64_BLOCK: usize = 4;

/// The Base64 padding character.
const PADDING: char = '=';

/// Errors from base conversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RadixError {
    /// Only non-negative integers have a positional encoding here.
    #[error("cannot encode negative integer {0}")]
    NegativeInput(Integer),

    /// Decoding needs at least one digit.
    #[error("cannot decode an empty string")]
    EmptyInput,

    /// A character outside the alphabet for the chosen base.
    #[error("character {0:?} is not a digit in base {1}")]
    InvalidDigit(char, u32),

    /// A base outside the supported set {2, 8, 10, 16, 32, 64}.
    #[error("unsupported base {0}, expected one of 2, 8, 10, 16, 32, 64")]
    UnsupportedBase(u32),
}

/// Encodes a non-negative integer as digits over `alphabet`.
///
/// Zero encodes as the alphabet's first character; otherwise digits are
/// produced by repeated division, most significant first.
///
/// # Errors
///
/// [`RadixError::NegativeInput`] for negative input.
///
/// # Panics
///
/// Panics if `alphabet` has fewer than `base` characters.
pub fn convert_to_base(
    number: &Integer,
    base: u32,
    alphabet: &str,
) -> Result<String, RadixError> {
    if number.is_negative() {
        return Err(RadixError::NegativeInput(number.clone()));
    }

    let digits: Vec<char> = alphabet.chars().collect();
    assert!(digits.len() >= base as usize, "alphabet too short for base");

    if number.is_zero() {
        return Ok(digits[0].to_string());
    }

    let base_int = Integer::from(base);
    let mut quotient = number.clone();
    let mut encoded = Vec::new();
    while !quotient.is_zero() {
        let (q, r) = quotient.div_rem(&base_int);
        let digit = r.to_i64().expect("remainder below base fits in i64");
        encoded.push(digits[usize::try_from(digit).expect("remainder is non-negative")]);
        quotient = q;
    }

    Ok(encoded.iter().rev().collect())
}

/// Decodes a digit string over `alphabet` by Horner accumulation.
///
/// # Errors
///
/// [`RadixError::EmptyInput`] for an empty string and
/// [`RadixError::InvalidDigit`] for a character outside the alphabet.
pub fn convert_from_base(
    encoded: &str,
    base: u32,
    alphabet: &str,
) -> Result<Integer, RadixError> {
    if encoded.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    let base_int = Integer::from(base);
    let mut result = Integer::new(0);
    for c in encoded.chars() {
        let digit = alphabet
            .chars()
            .position(|d| d == c)
            .ok_or(RadixError::InvalidDigit(c, base))?;
        result = result * &base_int + Integer::from(digit as u64);
    }
    Ok(result)
}

/// Encodes a non-negative integer in Base64, padded with `=` to a
/// multiple of four characters. Zero encodes as `"A==="`.
///
/// # Errors
///
/// [`RadixError::NegativeInput`] for negative input.
pub fn convert_to_base64(number: &Integer) -> Result<String, RadixError> {
    let mut encoded = convert_to_base(number, 64, BASE64_ALPHABET)?;
    while encoded.len() % BASE64_BLOCK != 0 {
        encoded.push(PADDING);
    }
    Ok(encoded)
}

/// Decodes a Base64 string produced by [`convert_to_base64`], ignoring
/// trailing padding.
///
/// # Errors
///
/// [`RadixError::EmptyInput`] when nothing but padding remains and
/// [`RadixError::InvalidDigit`] for characters outside the table.
pub fn convert_from_base64(encoded: &str) -> Result<Integer, RadixError> {
    let trimmed = encoded.trim_end_matches(PADDING);
    if trimmed.is_empty() {
        return Err(RadixError::EmptyInput);
    }
    convert_from_base(trimmed, 64, BASE64_ALPHABET)
}

/// Re-encodes `value` from `old_base` into `new_base`.
///
/// Supported bases are exactly 2, 8, 10, 16, 32 and 64.
///
/// # Errors
///
/// [`RadixError::UnsupportedBase`] for any other base, plus the decode
/// errors of [`convert_from_base`] / [`convert_from_base64`].
pub fn convert_base(value: &str, old_base: u32, new_base: u32) -> Result<String, RadixError> {
    let number = match (old_base, alphabet_for_base(old_base)) {
        (64, _) => convert_from_base64(value)?,
        (_, Some(alphabet)) => convert_from_base(value, old_base, alphabet)?,
        (_, None) => return Err(RadixError::UnsupportedBase(old_base)),
    };
    match (new_base, alphabet_for_base(new_base)) {
        (64, _) => convert_to_base64(&number),
        (_, Some(alphabet)) => convert_to_base(&number, new_base, alphabet),
        (_, None) => Err(RadixError::UnsupportedBase(new_base)),
    }
}

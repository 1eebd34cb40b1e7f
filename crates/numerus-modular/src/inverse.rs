//! Modular inverse via Fermat's little theorem.

use numerus_integers::Integer;

use crate::ModularError;

/// Computes `a^(modulus - 2) mod modulus`.
///
/// By Fermat's little theorem this is the inverse of `a` when `modulus`
/// is prime and `a` is not a multiple of it. Primality of the modulus is
/// the caller's contract and is not checked; for a composite modulus the
/// result is meaningless. Use [`Integer::mod_inverse`] when the modulus
/// is not known to be prime.
///
/// # Errors
///
/// [`ModularError::InvalidArgument`] when `a <= 0` or `modulus <= 1`.
pub fn mod_inverse_fermat(a: &Integer, modulus: &Integer) -> Result<Integer, ModularError> {
    if a <= &Integer::new(0) || modulus <= &Integer::new(1) {
        return Err(ModularError::InvalidArgument);
    }
    Ok(a.modpow(&(modulus - &Integer::new(2)), modulus))
}

//! The Chinese Remainder Theorem.

use numerus_integers::Integer;

use crate::ModularError;

/// Solves the system `x ≡ residues[i] (mod moduli[i])`.
///
/// Returns the unique solution in `[0, M)` where `M` is the product of
/// the moduli. The moduli must be pairwise coprime; a shared factor makes
/// some partial product non-invertible and is reported as
/// [`ModularError::ModuliNotCoprime`] instead of producing a wrong
/// residue.
///
/// # Errors
///
/// [`ModularError::LengthMismatch`] when the slices disagree in length,
/// [`ModularError::ModuliNotCoprime`] as above.
pub fn chinese_remainder_theorem(
    residues: &[Integer],
    moduli: &[Integer],
) -> Result<Integer, ModularError> {
    if residues.len() != moduli.len() {
        return Err(ModularError::LengthMismatch {
            residues: residues.len(),
            moduli: moduli.len(),
        });
    }

    let mut product = Integer::new(1);
    for modulus in moduli {
        product = product * modulus;
    }

    let mut acc = Integer::new(0);
    for (residue, modulus) in residues.iter().zip(moduli) {
        let partial = &product / modulus;
        let inverse = match partial.mod_inverse(modulus) {
            Some(inverse) => inverse,
            None => return Err(ModularError::ModuliNotCoprime),
        };
        acc = acc + residue * &partial * &inverse;
    }

    Ok(acc.rem_euclid(&product))
}

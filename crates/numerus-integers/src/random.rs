//! Uniform random sampling of arbitrary precision integers.
//!
//! Every function takes the random source as an explicit `rand::Rng`
//! parameter, so callers choose the tier: pass [`rand::rngs::OsRng`] (or
//! another CSPRNG) for key-grade sampling, or a seeded `ChaCha8Rng` for
//! deterministic replay in tests.

use rand::Rng;

use crate::Integer;

/// Samples a uniform integer in `[0, 2^bits)`.
#[must_use]
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: usize) -> Integer {
    if bits == 0 {
        return Integer::new(0);
    }
    let n_bytes = (bits + 7) / 8;
    let mut buf = vec![0u8; n_bytes];
    rng.fill_bytes(&mut buf);
    // Mask the excess high bits so the value stays below 2^bits.
    let excess = n_bytes * 8 - bits;
    buf[0] &= 0xff >> excess;
    Integer::from_be_bytes(&buf)
}

/// Samples a uniform integer in `[0, bound)` by rejection.
///
/// # Panics
///
/// Panics if `bound` is not positive.
#[must_use]
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &Integer) -> Integer {
    assert!(bound > &Integer::new(0), "bound must be positive");
    let bits = bound.bit_len();
    loop {
        let candidate = random_bits(rng, bits);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Samples a uniform integer in `[low, high)`.
///
/// # Panics
///
/// Panics if `low >= high`.
#[must_use]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, low: &Integer, high: &Integer) -> Integer {
    assert!(low < high, "low must be below high");
    low + &random_below(rng, &(high - low))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_random_bits_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for bits in [1usize, 7, 8, 9, 64, 257] {
            for _ in 0..50 {
                let v = random_bits(&mut rng, bits);
                assert!(v >= Integer::new(0));
                assert!(v.bit_len() <= bits);
            }
        }
    }

    #[test]
    fn test_random_bits_zero_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(random_bits(&mut rng, 0), Integer::new(0));
    }

    #[test]
    fn test_random_below() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bound = Integer::new(1000);
        for _ in 0..200 {
            let v = random_below(&mut rng, &bound);
            assert!(v >= Integer::new(0) && v < bound);
        }
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let low = Integer::new(50);
        let high = Integer::new(60);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let v = random_in_range(&mut rng, &low, &high);
            assert!(v >= low && v < high);
            seen.insert(v.to_i64().unwrap());
        }
        // Ten values, three hundred draws: every one should appear.
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_singleton_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let v = random_in_range(&mut rng, &Integer::new(2), &Integer::new(3));
        assert_eq!(v, Integer::new(2));
    }

    #[test]
    #[should_panic(expected = "low must be below high")]
    fn test_empty_range_panics() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let _ = random_in_range(&mut rng, &Integer::new(5), &Integer::new(5));
    }
}

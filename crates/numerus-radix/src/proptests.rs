//! Property-based tests for base conversion.

#[cfg(test)]
mod tests {
    use numerus_integers::Integer;
    use proptest::prelude::*;

    use crate::alphabet::alphabet_for_base;
    use crate::convert::{
        convert_base, convert_from_base, convert_from_base64, convert_to_base, convert_to_base64,
    };

    // Up to 32 bytes: covers 256-bit integers.
    fn big_int() -> impl Strategy<Value = Integer> {
        proptest::collection::vec(any::<u8>(), 0..=32).prop_map(|bytes| {
            Integer::from_be_bytes(&bytes)
        })
    }

    proptest! {
        #[test]
        fn round_trip_every_base(n in big_int()) {
            for base in [2u32, 8, 10, 16, 32] {
                let alphabet = alphabet_for_base(base).unwrap();
                let encoded = convert_to_base(&n, base, alphabet).unwrap();
                let decoded = convert_from_base(&encoded, base, alphabet).unwrap();
                prop_assert_eq!(&decoded, &n, "base {}", base);
            }
        }

        #[test]
        fn round_trip_base64(n in big_int()) {
            let encoded = convert_to_base64(&n).unwrap();
            prop_assert_eq!(encoded.len() % 4, 0);
            prop_assert_eq!(convert_from_base64(&encoded).unwrap(), n);
        }

        #[test]
        fn decimal_encoding_matches_display(n in big_int()) {
            let alphabet = alphabet_for_base(10).unwrap();
            prop_assert_eq!(
                convert_to_base(&n, 10, alphabet).unwrap(),
                n.to_string()
            );
        }

        #[test]
        fn convert_base_round_trip(n in big_int(), old in 0usize..5, new in 0usize..5) {
            let bases = [2u32, 8, 10, 16, 32];
            let (old_base, new_base) = (bases[old], bases[new]);
            let origin = convert_to_base(&n, old_base, alphabet_for_base(old_base).unwrap()).unwrap();
            let converted = convert_base(&origin, old_base, new_base).unwrap();
            let back = convert_base(&converted, new_base, old_base).unwrap();
            prop_assert_eq!(back, origin);
        }
    }
}

//! Fixed digit alphabets.
//!
//! Each alphabet is an ordered sequence of distinct characters whose
//! length is the base; position in the string is the digit value. Bases
//! 2 through 32 share one digit family (decimal digits extended with
//! uppercase letters); Base64 uses the standard `A-Za-z0-9+/` table, so
//! zero encodes as `A`.

/// Binary digits.
pub const BASE2_ALPHABET: &str = "01";

/// Octal digits.
pub const BASE8_ALPHABET: &str = "01234567";

/// Decimal digits.
pub const BASE10_ALPHABET: &str = "0123456789";

/// Hexadecimal digits.
pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";

/// Base-32 digits, continuing the hexadecimal family through `V`.
pub const BASE32_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// The Base64 digit table.
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Maps a supported non-Base64 base to its alphabet.
pub(crate) fn alphabet_for_base(base: u32) -> Option<&'static str> {
    match base {
        2 => Some(BASE2_ALPHABET),
        8 => Some(BASE8_ALPHABET),
        10 => Some(BASE10_ALPHABET),
        16 => Some(BASE16_ALPHABET),
        32 => Some(BASE32_ALPHABET),
        _ => None,
    }
}

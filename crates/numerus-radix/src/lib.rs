//! # numerus-radix
//!
//! Generic positional base encoding between arbitrary precision integers
//! and strings: divmod encoding, Horner decoding, a block-padded Base64
//! variant, and re-encoding between the supported bases 2, 8, 10, 16, 32
//! and 64.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod convert;

#[cfg(test)]
mod proptests;

pub use alphabet::{
    BASE10_ALPHABET, BASE16_ALPHABET, BASE2_ALPHABET, BASE32_ALPHABET, BASE64_ALPHABET,
    BASE8_ALPHABET,
};
pub use convert::{
    convert_base, convert_from_base, convert_from_base64, convert_to_base, convert_to_base64,
    RadixError,
};

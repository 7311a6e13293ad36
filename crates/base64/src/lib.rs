//! Base64 encoding and decoding over raw byte sequences.
//!
//! This crate implements the basic RFC 4648 variant only:
//! - Standard alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`)
//! - `'='` padding, always emitted and always required on decode
//! - No line wrapping, no URL-safe alphabet, no streaming
//!
//! Empty byte input yields `None` from both [`encode`] and [`decode`], which
//! keeps "nothing to do" apart from a valid empty result.
//!
//! # Example
//!
//! ```
//! use rialto_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data).unwrap();
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap().unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod decode;
mod encode;
mod lookup;
mod quartet;
mod triplet;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decode_text};
pub use encode::{encode, encode_text, encoded_len};
pub use lookup::Sextet;
pub use quartet::{Quartet, Quartets};
pub use triplet::{Triplet, Triplets};

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The input length is not a positive multiple of 4.
    #[error("base64 input length must be a positive multiple of 4, got {length}")]
    MalformedLength { length: usize },
    /// A byte outside the alphabet that is not the pad symbol.
    #[error("invalid base64 symbol 0x{symbol:02x} at position {position}")]
    InvalidSymbol { symbol: u8, position: usize },
    /// A pad symbol where no reconstruction is possible.
    #[error("misplaced base64 padding at position {position}")]
    InvalidPadPlacement { position: usize },
}

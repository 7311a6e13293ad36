//! Reverse lookup from encoded symbols to 6-bit values.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::Base64Error;

/// Marks bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

/// Symbol-to-index table, evaluated at compile time.
/// The pad symbol is deliberately absent and maps to `INVALID`.
static REVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// A reverse-mapped encoded symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sextet {
    /// An alphabet index in `0..64`.
    Symbol(u8),
    /// The `'='` pad marker.
    Pad,
}

impl Sextet {
    /// Maps an encoded byte to its sextet.
    ///
    /// `position` is only used to report where an invalid symbol was found.
    ///
    /// # Example
    ///
    /// ```
    /// use rialto_base64::Sextet;
    ///
    /// assert_eq!(Sextet::from_symbol(b'A', 0), Ok(Sextet::Symbol(0)));
    /// assert_eq!(Sextet::from_symbol(b'/', 0), Ok(Sextet::Symbol(63)));
    /// assert_eq!(Sextet::from_symbol(b'=', 0), Ok(Sextet::Pad));
    /// assert!(Sextet::from_symbol(b'!', 0).is_err());
    /// ```
    pub fn from_symbol(symbol: u8, position: usize) -> Result<Self, Base64Error> {
        if symbol == PAD_BYTE {
            return Ok(Sextet::Pad);
        }
        match REVERSE[symbol as usize] {
            INVALID => Err(Base64Error::InvalidSymbol { symbol, position }),
            index => Ok(Sextet::Symbol(index)),
        }
    }

    /// Maps the sextet back to its encoded byte.
    pub fn to_symbol(self) -> u8 {
        match self {
            Sextet::Symbol(index) => ALPHABET_BYTES[(index & 0x3F) as usize],
            Sextet::Pad => PAD_BYTE,
        }
    }

    /// Returns the alphabet index, or `None` for the pad marker.
    pub fn index(self) -> Option<u8> {
        match self {
            Sextet::Symbol(index) => Some(index),
            Sextet::Pad => None,
        }
    }

    pub fn is_pad(self) -> bool {
        matches!(self, Sextet::Pad)
    }
}

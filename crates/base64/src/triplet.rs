//! Groups of up to three raw bytes.

use std::slice::Chunks;

use crate::lookup::Sextet;
use crate::quartet::Quartet;
use crate::Base64Error;

/// One to three raw bytes: a full group, or the short tail of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triplet {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
}

impl Triplet {
    /// Builds a triplet from a 1..=3 byte window, `None` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [a] => Some(Triplet::One(a)),
            [a, b] => Some(Triplet::Two(a, b)),
            [a, b, c] => Some(Triplet::Three(a, b, c)),
            _ => None,
        }
    }

    /// Reconstructs the bytes carried by a decoded quartet.
    ///
    /// `offset` is the position of the quartet's first symbol in the encoded
    /// input and only feeds error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::InvalidPadPlacement`] when a pad occupies one of
    /// the first two positions, or when the third position is a pad but the
    /// fourth is not.
    ///
    /// # Example
    ///
    /// ```
    /// use rialto_base64::{Quartet, Triplet};
    ///
    /// let quartet = Quartet::from_symbols(b"TWE=", 0).unwrap();
    /// assert_eq!(Triplet::from_quartet(&quartet, 0), Ok(Triplet::Two(b'M', b'a')));
    /// ```
    pub fn from_quartet(quartet: &Quartet, offset: usize) -> Result<Self, Base64Error> {
        use Sextet::{Pad, Symbol};

        match quartet.sextets() {
            [Symbol(i0), Symbol(i1), Pad, Pad] => Ok(Triplet::One((i0 << 2) | (i1 >> 4))),
            [Symbol(i0), Symbol(i1), Symbol(i2), Pad] => Ok(Triplet::Two(
                (i0 << 2) | (i1 >> 4),
                ((i1 & 0xF) << 4) | (i2 >> 2),
            )),
            [Symbol(i0), Symbol(i1), Symbol(i2), Symbol(i3)] => Ok(Triplet::Three(
                (i0 << 2) | (i1 >> 4),
                ((i1 & 0xF) << 4) | (i2 >> 2),
                ((i2 & 0x3) << 6) | (i3 & 0x3F),
            )),
            _ => Err(Base64Error::InvalidPadPlacement {
                position: offset + quartet.pad_position().unwrap_or(0),
            }),
        }
    }

    /// Number of significant bytes (1..=3).
    pub fn len(&self) -> usize {
        match self {
            Triplet::One(..) => 1,
            Triplet::Two(..) => 2,
            Triplet::Three(..) => 3,
        }
    }

    /// Always `false`; a triplet never holds zero bytes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends the significant bytes to `out`.
    pub fn write_to(self, out: &mut Vec<u8>) {
        match self {
            Triplet::One(a) => out.push(a),
            Triplet::Two(a, b) => out.extend_from_slice(&[a, b]),
            Triplet::Three(a, b, c) => out.extend_from_slice(&[a, b, c]),
        }
    }
}

/// Iterates an input in non-overlapping windows of three bytes.
///
/// The last window may be shorter; no window is produced for an empty input.
pub struct Triplets<'a> {
    chunks: Chunks<'a, u8>,
}

impl<'a> Triplets<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        Self {
            chunks: raw.chunks(3),
        }
    }
}

impl Iterator for Triplets<'_> {
    type Item = Triplet;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().and_then(Triplet::from_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

//! Groups of exactly four encoded symbols.

use std::slice::ChunksExact;

use crate::lookup::Sextet;
use crate::triplet::Triplet;
use crate::Base64Error;

/// Four encoded symbols, each an alphabet index or a pad marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quartet([Sextet; 4]);

impl Quartet {
    pub fn new(sextets: [Sextet; 4]) -> Self {
        Self(sextets)
    }

    /// Reverse-maps four encoded bytes. `offset` locates them in the input for
    /// error reporting.
    pub fn from_symbols(symbols: &[u8; 4], offset: usize) -> Result<Self, Base64Error> {
        let mut sextets = [Sextet::Pad; 4];
        for (i, (&symbol, slot)) in symbols.iter().zip(sextets.iter_mut()).enumerate() {
            *slot = Sextet::from_symbol(symbol, offset + i)?;
        }
        Ok(Self(sextets))
    }

    pub fn sextets(&self) -> [Sextet; 4] {
        self.0
    }

    /// The encoded bytes of this quartet.
    pub fn symbols(&self) -> [u8; 4] {
        self.0.map(Sextet::to_symbol)
    }

    /// Index of the first pad marker, if any.
    pub fn pad_position(&self) -> Option<usize> {
        self.0.iter().position(|s| s.is_pad())
    }
}

impl From<Triplet> for Quartet {
    fn from(triplet: Triplet) -> Self {
        use Sextet::{Pad, Symbol};

        match triplet {
            Triplet::One(a) => Self([Symbol(a >> 2), Symbol((a & 0x3) << 4), Pad, Pad]),
            Triplet::Two(a, b) => Self([
                Symbol(a >> 2),
                Symbol(((a & 0x3) << 4) | (b >> 4)),
                Symbol((b & 0xF) << 2),
                Pad,
            ]),
            Triplet::Three(a, b, c) => Self([
                Symbol(a >> 2),
                Symbol(((a & 0x3) << 4) | (b >> 4)),
                Symbol(((b & 0xF) << 2) | (c >> 6)),
                Symbol(c & 0x3F),
            ]),
        }
    }
}

/// Iterates reverse-mapped symbols in windows of exactly four.
///
/// Yields each quartet together with the offset of its first symbol.
pub struct Quartets<'a> {
    chunks: ChunksExact<'a, Sextet>,
    offset: usize,
}

impl<'a> Quartets<'a> {
    /// # Errors
    ///
    /// Returns [`Base64Error::MalformedLength`] unless `sextets` holds a
    /// positive multiple of four entries.
    pub fn new(sextets: &'a [Sextet]) -> Result<Self, Base64Error> {
        let length = sextets.len();
        if length == 0 || length % 4 != 0 {
            return Err(Base64Error::MalformedLength { length });
        }
        Ok(Self {
            chunks: sextets.chunks_exact(4),
            offset: 0,
        })
    }
}

impl Iterator for Quartets<'_> {
    type Item = (usize, Quartet);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let quartet = Quartet([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let offset = self.offset;
        self.offset += 4;
        Some((offset, quartet))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_full_triplet() {
        let quartet = Quartet::from(Triplet::Three(b'M', b'a', b'n'));
        assert_eq!(&quartet.symbols(), b"TWFu");
        assert_eq!(quartet.pad_position(), None);
    }

    #[test]
    fn pads_short_triplets() {
        assert_eq!(&Quartet::from(Triplet::Two(b'M', b'a')).symbols(), b"TWE=");
        assert_eq!(&Quartet::from(Triplet::One(b'M')).symbols(), b"TQ==");
        assert_eq!(Quartet::from(Triplet::One(0)).pad_position(), Some(2));
    }

    #[test]
    fn decodes_back_to_the_same_triplet() {
        for triplet in [
            Triplet::One(0xFF),
            Triplet::Two(0x00, 0xFF),
            Triplet::Three(0xDE, 0xAD, 0xBF),
        ] {
            let quartet = Quartet::from(triplet);
            assert_eq!(Triplet::from_quartet(&quartet, 0), Ok(triplet));
        }
    }

    #[test]
    fn from_symbols_reports_absolute_position() {
        assert_eq!(
            Quartet::from_symbols(b"ab!d", 12),
            Err(Base64Error::InvalidSymbol {
                symbol: b'!',
                position: 14
            })
        );
    }

    #[test]
    fn grouping_requires_positive_multiple_of_four() {
        let sextets = vec![Sextet::Symbol(0); 5];
        assert_eq!(
            Quartets::new(&sextets).err(),
            Some(Base64Error::MalformedLength { length: 5 })
        );
        assert_eq!(
            Quartets::new(&[]).err(),
            Some(Base64Error::MalformedLength { length: 0 })
        );
    }

    #[test]
    fn grouping_yields_offsets() {
        let sextets = vec![Sextet::Symbol(1); 12];
        let quartets = Quartets::new(&sextets).unwrap();
        let offsets: Vec<usize> = quartets.map(|(offset, _)| offset).collect();
        assert_eq!(offsets, vec![0, 4, 8]);
    }
}

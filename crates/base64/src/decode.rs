//! Standard base64 decoding.

use crate::lookup::Sextet;
use crate::quartet::Quartets;
use crate::triplet::Triplet;
use crate::Base64Error;

/// Decodes padded standard base64.
///
/// Returns `Ok(None)` for an empty input, mirroring [`encode`](crate::encode).
///
/// # Errors
///
/// - [`Base64Error::InvalidSymbol`] if a byte is neither in the alphabet nor `'='`.
/// - [`Base64Error::MalformedLength`] if the length is not a multiple of 4.
/// - [`Base64Error::InvalidPadPlacement`] if `'='` appears anywhere other than
///   the last two positions of the final quartet, or is followed by a symbol.
///
/// No partial output is returned on failure.
///
/// # Example
///
/// ```
/// use rialto_base64::{decode, Base64Error};
///
/// assert_eq!(decode(b"TWE=").unwrap().as_deref(), Some(&b"Ma"[..]));
/// assert_eq!(decode(b"").unwrap(), None);
/// assert_eq!(decode(b"TWFuT"), Err(Base64Error::MalformedLength { length: 5 }));
/// ```
pub fn decode(encoded: &[u8]) -> Result<Option<Vec<u8>>, Base64Error> {
    if encoded.is_empty() {
        log::trace!("decode called with empty input");
        return Ok(None);
    }

    decode_non_empty(encoded).map(Some).inspect_err(|err| {
        log::debug!("rejected base64 input of {} bytes: {err}", encoded.len());
    })
}

fn decode_non_empty(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let sextets = encoded
        .iter()
        .enumerate()
        .map(|(position, &symbol)| Sextet::from_symbol(symbol, position))
        .collect::<Result<Vec<_>, _>>()?;

    let quartets = Quartets::new(&sextets)?;
    let last = sextets.len() - 4;
    let mut out = Vec::with_capacity(sextets.len() / 4 * 3);

    for (offset, quartet) in quartets {
        if let Some(pad) = quartet.pad_position() {
            if offset != last {
                return Err(Base64Error::InvalidPadPlacement {
                    position: offset + pad,
                });
            }
        }
        Triplet::from_quartet(&quartet, offset)?.write_to(&mut out);
    }

    Ok(out)
}

/// Decodes base64 text and reconstructs a string from the decoded bytes.
///
/// Empty or whitespace-only input is returned unchanged. Only meaningful when
/// the payload is known to be UTF-8 text: invalid sequences in binary payloads
/// are replaced with `U+FFFD`, so the original bytes cannot be recovered.
///
/// # Example
///
/// ```
/// use rialto_base64::decode_text;
///
/// assert_eq!(decode_text("TQ==").unwrap(), "M");
/// assert_eq!(decode_text("").unwrap(), "");
/// ```
pub fn decode_text(encoded: &str) -> Result<String, Base64Error> {
    if encoded.trim().is_empty() {
        return Ok(encoded.to_owned());
    }
    Ok(match decode(encoded.as_bytes())? {
        Some(raw) => String::from_utf8_lossy(&raw).into_owned(),
        None => encoded.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte() {
        assert_eq!(decode_text("Zg==").unwrap(), "f");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(decode_text("Zm8=").unwrap(), "fo");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(decode_text("Zm9v").unwrap(), "foo");
    }

    #[test]
    fn test_symbol_is_checked_before_length() {
        assert_eq!(
            decode(b"TWF!u"),
            Err(Base64Error::InvalidSymbol {
                symbol: b'!',
                position: 3
            })
        );
    }

    #[test]
    fn test_pad_in_non_final_quartet() {
        assert_eq!(
            decode(b"TQ==TWFu"),
            Err(Base64Error::InvalidPadPlacement { position: 2 })
        );
    }

    #[test]
    fn test_pad_only_quartet() {
        assert_eq!(
            decode(b"===="),
            Err(Base64Error::InvalidPadPlacement { position: 0 })
        );
    }

    #[test]
    fn test_trailing_bits_are_tolerated() {
        assert_eq!(decode(b"TR==").unwrap(), Some(b"M".to_vec()));
    }

    #[test]
    fn test_lossy_text() {
        assert_eq!(decode_text("/w==").unwrap(), "\u{FFFD}");
    }
}

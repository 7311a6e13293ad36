//! Standard base64 encoding.

use crate::quartet::Quartet;
use crate::triplet::Triplets;

/// Length of the padded encoding of `length` raw bytes.
///
/// ```
/// use rialto_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes a byte slice to padded standard base64.
///
/// Returns `None` for an empty input: there is nothing to encode, which is
/// kept distinct from a zero-length encoding.
///
/// # Example
///
/// ```
/// use rialto_base64::encode;
///
/// assert_eq!(encode(b"Man").as_deref(), Some(&b"TWFu"[..]));
/// assert_eq!(encode(b"M").as_deref(), Some(&b"TQ=="[..]));
/// assert_eq!(encode(b""), None);
/// ```
pub fn encode(raw: &[u8]) -> Option<Vec<u8>> {
    if raw.is_empty() {
        log::trace!("encode called with empty input");
        return None;
    }

    let mut out = Vec::with_capacity(encoded_len(raw.len()));
    for triplet in Triplets::new(raw) {
        out.extend_from_slice(&Quartet::from(triplet).symbols());
    }
    Some(out)
}

/// Encodes the bytes of a string.
///
/// Empty or whitespace-only input is returned unchanged.
///
/// # Example
///
/// ```
/// use rialto_base64::encode_text;
///
/// assert_eq!(encode_text("Ma"), "TWE=");
/// assert_eq!(encode_text("   "), "   ");
/// ```
pub fn encode_text(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_owned();
    }
    match encode(raw.as_bytes()) {
        Some(encoded) => encoded.into_iter().map(char::from).collect(),
        None => raw.to_owned(),
    }
}

//! Base58 codec
//!
//! Arbitrary-precision Base58 over Bitcoin's 58-character alphabet
//! (0, O, I and l are excluded). Leading zero bytes map 1:1 to leading
//! '1' characters, so addresses keep their length through a round trip.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Result, WalletError};

const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Value of a Base58 character, or `None` for characters outside the
/// alphabet.
fn base58_char_value(c: u8) -> Option<u8> {
    match c {
        b'1'..=b'9' => Some(c - b'1'),
        b'A'..=b'H' => Some(c - b'A' + 9),
        b'J'..=b'N' => Some(c - b'J' + 17),
        b'P'..=b'Z' => Some(c - b'P' + 22),
        b'a'..=b'k' => Some(c - b'a' + 33),
        b'm'..=b'z' => Some(c - b'm' + 44),
        _ => None,
    }
}

/// Check whether `c` belongs to the Base58 alphabet
pub fn is_base58_char(c: char) -> bool {
    c.is_ascii() && base58_char_value(c as u8).is_some()
}

/// Check whether `b58` is a correctly formatted Base58 string.
///
/// The empty string is valid.
pub fn is_base58_string(b58: &str) -> bool {
    b58.bytes().all(|c| base58_char_value(c).is_some())
}

/// Encode `data` as a Base58 string.
///
/// Empty input encodes to the empty string.
pub fn base58_encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    // Special case, all zeros.
    if leading_zeros == data.len() {
        return "1".repeat(leading_zeros);
    }

    // Treat the remaining bytes as one big-endian integer and convert to
    // base 58 by repeated division; remainders come out least-significant
    // digit first.
    let mut acc = BigUint::from_bytes_be(&data[leading_zeros..]);
    let mut values: Vec<u8> = Vec::new();
    while !acc.is_zero() {
        let rem = &acc % 58u32;
        acc = &acc / 58u32;
        values.push(rem.to_u8().unwrap_or(0));
    }

    let mut result = String::with_capacity(leading_zeros + values.len());
    for _ in 0..leading_zeros {
        result.push('1');
    }
    for &v in values.iter().rev() {
        result.push(BASE58_ALPHABET[v as usize] as char);
    }
    result
}

/// Decode a Base58 string into bytes.
///
/// The whole string is validated against the alphabet before any
/// arithmetic; the empty string decodes to an empty vector.
pub fn base58_decode(b58: &str) -> Result<Vec<u8>> {
    if !is_base58_string(b58) {
        log::error!("String is not base58 encoded");
        return Err(WalletError::Encoding(
            "string contains non-base58 characters".to_string(),
        ));
    }
    if b58.is_empty() {
        return Ok(Vec::new());
    }
    let chars = b58.as_bytes();
    let leading_zeros = chars.iter().take_while(|&&c| c == b'1').count();
    // Special case, all zeros.
    if leading_zeros == chars.len() {
        return Ok(vec![0u8; leading_zeros]);
    }

    let mut acc = BigUint::zero();
    for &c in chars {
        let value = match base58_char_value(c) {
            Some(v) => u32::from(v),
            // Guarded by the alphabet check above.
            None => {
                return Err(WalletError::Encoding(format!(
                    "invalid base58 character: {}",
                    c as char
                )))
            }
        };
        acc = acc * 58u32 + value;
    }

    // Minimum big-endian serialization, left-padded with the zero bytes
    // counted above.
    let decoded = acc.to_bytes_be();
    let mut result = vec![0u8; leading_zeros];
    result.extend_from_slice(&decoded);
    Ok(result)
}

/// Decode a Base58 string into a caller-provided buffer.
///
/// Writes as many leading bytes as fit and always returns the full
/// decoded length, so a zero-capacity call reports the required buffer
/// size without writing anything.
pub fn base58_decode_into(b58: &str, buffer: &mut [u8]) -> Result<usize> {
    let decoded = base58_decode(b58)?;
    let copy_len = buffer.len().min(decoded.len());
    buffer[..copy_len].copy_from_slice(&decoded[..copy_len]);
    Ok(decoded.len())
}

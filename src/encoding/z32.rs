//! z-base-32 encoding
//!
//! Human-oriented base-32 with a lowercase alphabet chosen to avoid
//! ambiguous glyphs. Bits are consumed most-significant first; the final
//! symbol is zero-filled and no padding characters are emitted.

use thiserror::Error;

/// The z-base-32 alphabet, indexed by 5-bit symbol value
pub const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid encoded length: {0}")]
    InvalidLength(usize),

    #[error("Non-zero trailing bits")]
    NonZeroPadding,
}

/// Number of symbols needed to encode `bytes` bytes
pub fn encoded_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(5)
}

/// Encode bytes as z-base-32
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut buffer: u16 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    out
}

/// Decode a canonical z-base-32 string
///
/// Only the exact output of [`encode`] is accepted: uppercase symbols,
/// lengths no byte sequence encodes to, and set trailing bits are all
/// rejected, so every byte sequence has exactly one textual form.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits = 0u32;

    for (position, character) in input.char_indices() {
        let value = symbol_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;

        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    // A whole symbol left over means the length cannot come from `encode`.
    if bits >= 5 {
        return Err(DecodeError::InvalidLength(input.len()));
    }
    if buffer != 0 {
        return Err(DecodeError::NonZeroPadding);
    }

    Ok(out)
}

fn symbol_value(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DECODE_TABLE[character as usize] {
        INVALID => None,
        value => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let vectors: &[(&[u8], &str)] = &[
            (b"", ""),
            (&[0x00], "yy"),
            (&[0xff], "9h"),
            (b"f", "ca"),
            (b"fo", "c3zo"),
            (b"foo", "c3zs6"),
            (b"foob", "c3zs6ao"),
            (b"fooba", "c3zs6aub"),
            (b"foobar", "c3zs6aubqe"),
            (b"hello world", "pb1sa5dxrb5s6hucco"),
        ];

        for (data, text) in vectors {
            assert_eq!(encode(data), *text);
            assert_eq!(decode(text).unwrap(), *data);
        }
    }

    #[test]
    fn test_encoded_len_matches_output() {
        for len in 0..=40 {
            let data = vec![0xa5u8; len];
            assert_eq!(encode(&data).len(), encoded_len(len));
        }
    }

    #[test]
    fn test_output_uses_alphabet_only() {
        let data: Vec<u8> = (0..=255).collect();
        let text = encode(&data);

        assert!(text.bytes().all(|b| ALPHABET.contains(&b)));
        assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn test_rejects_unknown_characters() {
        // 'l', 'v', '0' and '2' are deliberately absent from the alphabet
        assert_eq!(
            decode("yl"),
            Err(DecodeError::InvalidCharacter {
                character: 'l',
                position: 1
            })
        );
        assert!(matches!(
            decode("0y"),
            Err(DecodeError::InvalidCharacter { character: '0', .. })
        ));
        assert!(matches!(
            decode("yé"),
            Err(DecodeError::InvalidCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn test_rejects_uppercase() {
        assert!(matches!(
            decode("C3ZO"),
            Err(DecodeError::InvalidCharacter { character: 'C', .. })
        ));
    }

    #[test]
    fn test_rejects_impossible_lengths() {
        assert_eq!(decode("y"), Err(DecodeError::InvalidLength(1)));
        assert_eq!(decode("yyy"), Err(DecodeError::InvalidLength(3)));
        assert_eq!(decode("yyyyyy"), Err(DecodeError::InvalidLength(6)));
    }

    #[test]
    fn test_rejects_non_canonical_padding() {
        // "yy" is 0x00; "yb" sets one of the two trailing bits
        assert_eq!(decode("yy").unwrap(), vec![0x00]);
        assert_eq!(decode("yb"), Err(DecodeError::NonZeroPadding));
    }
}

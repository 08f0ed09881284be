//! Encoding Module - canonical textual form for public keys
//!
//! Public keys are rendered with z-base-32: lowercase, unpadded and
//! unambiguous, with exactly one valid string per key.

pub mod z32;

pub use z32::DecodeError;

use thiserror::Error;

/// Length in bytes of an encodable public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length in characters of an encoded public key
pub const ENCODED_PUBLIC_KEY_LENGTH: usize = 52;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Encode raw public key bytes as z-base-32
pub fn encode_public_key(bytes: &[u8]) -> Result<String, EncodingError> {
    check_key_length(bytes.len())?;
    Ok(z32::encode(bytes))
}

/// Decode a z-base-32 public key into its raw bytes
pub fn decode_public_key(text: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], EncodingError> {
    let bytes = z32::decode(text)?;
    check_key_length(bytes.len())?;

    let mut key = [0u8; PUBLIC_KEY_LENGTH];
    key.copy_from_slice(&bytes);
    Ok(key)
}

fn check_key_length(actual: usize) -> Result<(), EncodingError> {
    if actual != PUBLIC_KEY_LENGTH {
        return Err(EncodingError::InvalidKeyLength {
            expected: PUBLIC_KEY_LENGTH,
            actual,
        });
    }
    Ok(())
}

//! Identity Module - deterministic Ed25519 identities
//!
//! A 32-byte secret seed fully determines a [`Keypair`]. The public half is
//! exposed as a [`PublicKey`], whose canonical text form is z-base-32.

mod keys;
mod public_key;

pub use keys::{Keypair, SECRET_KEY_LENGTH};
pub use public_key::PublicKey;

use crate::encoding::EncodingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_HEX: &str = "5aa93b299a343aa2691739771f2b5b85e740ca14c685793d67870f88fa89dc51";
    const PUBLIC_Z32: &str = "gcumbhd7sqit6nn457jxmrwqx9pyymqwamnarekgo3xppqo6a19o";

    #[test]
    fn test_derive_and_encode() {
        let keypair = Keypair::from_secret_hex(SECRET_HEX).unwrap();
        let public_key = keypair.public_key();

        assert_eq!(public_key.to_string(), PUBLIC_Z32);
        assert_eq!(PublicKey::try_from(PUBLIC_Z32).unwrap(), public_key);
    }

    #[test]
    fn test_public_key_round_trip_through_encoder() {
        let keypair = Keypair::random();
        let encoded = crate::encoding::encode_public_key(keypair.public_key().as_bytes()).unwrap();

        assert_eq!(encoded, keypair.to_z32());
        assert_eq!(
            crate::encoding::decode_public_key(&encoded).unwrap(),
            *keypair.public_key().as_bytes()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Keypair::from_secret_key(&[7]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid seed length: expected 32 bytes, got 1"
        );
    }
}

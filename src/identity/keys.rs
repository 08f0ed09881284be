//! Keypair derivation from a secret seed

use super::{IdentityError, PublicKey};
use ed25519_dalek::SigningKey;
use std::fmt;
use zeroize::Zeroizing;

/// Length in bytes of an Ed25519 secret seed
pub const SECRET_KEY_LENGTH: usize = ed25519_dalek::SECRET_KEY_LENGTH;

/// Ed25519 key pair derived deterministically from a secret seed
///
/// The signing key is wiped from memory when the keypair is dropped.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Derive a key pair from a secret seed
    ///
    /// Fails with [`IdentityError::InvalidSeedLength`] unless `secret` is
    /// exactly [`SECRET_KEY_LENGTH`] bytes.
    pub fn from_secret_key(secret: &[u8]) -> Result<Self, IdentityError> {
        let seed: &[u8; SECRET_KEY_LENGTH] =
            secret
                .try_into()
                .map_err(|_| IdentityError::InvalidSeedLength {
                    expected: SECRET_KEY_LENGTH,
                    actual: secret.len(),
                })?;

        Ok(Self::from_secret_bytes(seed))
    }

    /// Derive a key pair from a fixed-size seed
    pub fn from_secret_bytes(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        let keypair = Self {
            signing_key: SigningKey::from_bytes(seed),
        };
        tracing::debug!(public_key = %keypair.public_key(), "derived keypair");
        keypair
    }

    /// Derive a key pair from a hex-encoded seed
    pub fn from_secret_hex(secret: &str) -> Result<Self, IdentityError> {
        let secret = secret.trim();

        // Report an even-length mismatch as a seed problem, not a hex one
        if secret.len() % 2 == 0 && secret.len() != SECRET_KEY_LENGTH * 2 {
            return Err(IdentityError::InvalidSeedLength {
                expected: SECRET_KEY_LENGTH,
                actual: secret.len() / 2,
            });
        }

        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        hex::decode_to_slice(secret, &mut seed[..])?;
        Ok(Self::from_secret_bytes(&seed))
    }

    /// Generate a fresh key pair from the operating system RNG
    pub fn random() -> Self {
        let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
        Self { signing_key }
    }

    /// Get the secret seed bytes
    pub fn secret_key(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Get the public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Get the canonical z-base-32 form of the public key
    pub fn to_z32(&self) -> String {
        self.public_key().to_z32()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

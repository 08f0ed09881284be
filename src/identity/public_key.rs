//! Public key view type and its textual forms

use super::{IdentityError, Keypair};
use crate::encoding::{self, PUBLIC_KEY_LENGTH};
use crate::IdentityConfig;
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, hash::Hash, str::FromStr};

/// Prefix accepted in front of a public key, e.g. `pk:<z32>`
pub const PUBLIC_KEY_PREFIX: &str = "pk:";

/// Ed25519 public key, displayed as z-base-32
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    pub(crate) fn from_verifying_key(key: VerifyingKey) -> Self {
        Self(key)
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }

    /// Get a copy of the raw bytes
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// The underlying Ed25519 verifying key
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }

    /// Convert to z-base-32 string
    pub fn to_z32(&self) -> String {
        encoding::z32::encode(self.as_bytes())
    }

    /// Parse from a canonical z-base-32 string
    pub fn from_z32(s: &str) -> Result<Self, IdentityError> {
        let bytes = encoding::decode_public_key(s)?;
        Self::try_from(&bytes)
    }

    /// Parse a public key from text, with the leniency given by `config`
    ///
    /// Besides the bare key this may accept a `pk:` prefix, a domain whose
    /// last label is the key (`_pubky.<key>.`), and uppercase input.
    pub fn parse_with(text: &str, config: &IdentityConfig) -> Result<Self, IdentityError> {
        let mut candidate = text.trim();

        if config.accept_prefix {
            candidate = candidate.strip_prefix(PUBLIC_KEY_PREFIX).unwrap_or(candidate);
        }

        if config.accept_domain {
            let host = candidate.strip_suffix('.').unwrap_or(candidate);
            candidate = host.rsplit('.').next().unwrap_or(host);
        }

        let lowered;
        if config.case_insensitive && candidate.bytes().any(|b| b.is_ascii_uppercase()) {
            lowered = candidate.to_ascii_lowercase();
            candidate = &lowered;
        }

        let key = Self::from_z32(candidate)?;
        tracing::trace!(input = text, public_key = %key, "parsed public key");
        Ok(key)
    }
}

impl TryFrom<&[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    type Error = IdentityError;

    fn try_from(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self, Self::Error> {
        VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|e| IdentityError::InvalidPublicKey(e.to_string()))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = IdentityError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| encoding::EncodingError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LENGTH,
                    actual: bytes.len(),
                })?;
        Self::try_from(bytes)
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = IdentityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse_with(s, &IdentityConfig::default())
    }
}

impl TryFrom<String> for PublicKey {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl FromStr for PublicKey {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<&Keypair> for PublicKey {
    fn from(keypair: &Keypair) -> Self {
        keypair.public_key()
    }
}

impl Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_z32())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_z32())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_z32())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

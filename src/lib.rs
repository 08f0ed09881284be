//! z32 Identity - deterministic Ed25519 identities
//!
//! This crate derives Ed25519 key pairs from fixed 32-byte secret seeds and
//! renders public keys in a canonical, lowercase z-base-32 form suitable for
//! use as human-readable identifiers and DNS labels.
//!
//! ```
//! use z32_identity::Keypair;
//!
//! let keypair = Keypair::from_secret_hex(
//!     "5aa93b299a343aa2691739771f2b5b85e740ca14c685793d67870f88fa89dc51",
//! )?;
//! assert_eq!(
//!     keypair.public_key().to_string(),
//!     "gcumbhd7sqit6nn457jxmrwqx9pyymqwamnarekgo3xppqo6a19o",
//! );
//! # Ok::<(), z32_identity::identity::IdentityError>(())
//! ```

pub mod encoding;
pub mod identity;

pub use encoding::{decode_public_key, encode_public_key};
pub use identity::{Keypair, PublicKey};

use std::path::Path;
use thiserror::Error;

/// Main error type for identity operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Identity error: {0}")]
    Identity(#[from] identity::IdentityError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] encoding::EncodingError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Controls how leniently public keys are parsed from text
///
/// Encoding is always canonical; these switches only widen what the parser
/// accepts before strict z-base-32 decoding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Accept a leading `pk:` prefix
    pub accept_prefix: bool,

    /// Accept a domain name whose last label is the key
    pub accept_domain: bool,

    /// Lowercase ASCII input before decoding
    pub case_insensitive: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            accept_prefix: true,
            accept_domain: true,
            case_insensitive: true,
        }
    }
}

impl IdentityConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), ?config, "loaded identity config");
        Ok(config)
    }
}

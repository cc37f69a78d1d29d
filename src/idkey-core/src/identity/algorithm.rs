use crate::error::identity_key::IdentityKeyError;
use crate::error::identity_key::IdentityKeyError::UnsupportedAlgorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const RSA_TAG: &str = "ac-rsa";
pub const ECDSA_TAG: &str = "ac-ecdsa";
pub const ED25519_TAG: &str = "ac-ec25519";

/// Older records carried this header for Ed25519 keys. Accepted when parsing, never emitted.
pub const LEGACY_ED25519_TAG: &str = "ac-25519";

pub const RSA_PEM_LABEL: &str = "RSA PRIVATE KEY";
pub const ECDSA_PEM_LABEL: &str = "ECDSA PRIVATE KEY";
pub const ED25519_PEM_LABEL: &str = "EC25519 PRIVATE KEY";

/// The public-key algorithm backing an identity key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAlgorithm {
    Rsa,
    /// ECDSA over NIST P-256.
    Ecdsa,
    Ed25519,
}

impl KeyAlgorithm {
    pub const ALL: [KeyAlgorithm; 3] = [
        KeyAlgorithm::Rsa,
        KeyAlgorithm::Ecdsa,
        KeyAlgorithm::Ed25519,
    ];

    /// Short name, as accepted on the command line and in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "rsa",
            KeyAlgorithm::Ecdsa => "ecdsa",
            KeyAlgorithm::Ed25519 => "ed25519",
        }
    }

    /// Header token of the public key record.
    pub fn tag(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => RSA_TAG,
            KeyAlgorithm::Ecdsa => ECDSA_TAG,
            KeyAlgorithm::Ed25519 => ED25519_TAG,
        }
    }

    /// Label of the armored private key block.
    pub fn pem_label(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => RSA_PEM_LABEL,
            KeyAlgorithm::Ecdsa => ECDSA_PEM_LABEL,
            KeyAlgorithm::Ed25519 => ED25519_PEM_LABEL,
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, IdentityKeyError> {
        match tag {
            RSA_TAG => Ok(KeyAlgorithm::Rsa),
            ECDSA_TAG => Ok(KeyAlgorithm::Ecdsa),
            ED25519_TAG | LEGACY_ED25519_TAG => Ok(KeyAlgorithm::Ed25519),
            other => Err(UnsupportedAlgorithm(other.to_string())),
        }
    }

    pub fn from_pem_label(label: &str) -> Result<Self, IdentityKeyError> {
        match label {
            RSA_PEM_LABEL => Ok(KeyAlgorithm::Rsa),
            ECDSA_PEM_LABEL => Ok(KeyAlgorithm::Ecdsa),
            ED25519_PEM_LABEL => Ok(KeyAlgorithm::Ed25519),
            other => Err(UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = IdentityKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rsa" => Ok(KeyAlgorithm::Rsa),
            "ecdsa" | "p256" => Ok(KeyAlgorithm::Ecdsa),
            "ed25519" | "ec25519" => Ok(KeyAlgorithm::Ed25519),
            _ => KeyAlgorithm::from_tag(s),
        }
    }
}

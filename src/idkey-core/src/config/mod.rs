//! Key generation settings, loadable from a JSON file.
//!
//! ```json
//! { "algorithm": "rsa", "rsa_bits": 3072, "kdf": { "memory_kib": 64000 } }
//! ```
//! Every field is optional and falls back to its default.
use crate::error::structured_file::StructuredFileError;
use crate::identity::keygen::DEFAULT_RSA_BITS;
use crate::identity::{KdfParams, KeyAlgorithm};
use crate::json::load_json_file;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyGenConfiguration {
    /// Algorithm of newly generated identity keys.
    pub algorithm: KeyAlgorithm,

    /// RSA modulus size in bits. Ignored for other algorithms.
    pub rsa_bits: usize,

    /// Cost of deriving the private block key from the password.
    pub kdf: KdfParams,
}

impl Default for KeyGenConfiguration {
    fn default() -> Self {
        Self {
            algorithm: KeyAlgorithm::Ed25519,
            rsa_bits: DEFAULT_RSA_BITS,
            kdf: KdfParams::default(),
        }
    }
}

impl KeyGenConfiguration {
    pub fn load(path: &Path) -> Result<Self, StructuredFileError> {
        load_json_file(path)
    }
}

//! Identity key type and module.
//!
//! An [`IdentityKey`] holds the private material of exactly one algorithm. The public half is
//! derived on demand. Keys serialize to two portable forms: a one-line public record
//! (`<tag> <base64(zlib(der))>`) and a password-protected armored private block.
use crate::config::KeyGenConfiguration;
use crate::error::identity_key::IdentityKeyError;
use crate::error::identity_key::IdentityKeyError::GenerationFailure;
use crate::error::io::IoError;
use crate::error::io::IoErrorKind::WriteSinkFailed;
use rand_core::CryptoRngCore;
use slog::{debug, Logger};
use std::fmt;
use std::io::Write;

pub use algorithm::KeyAlgorithm;
pub use key_files::IdentityKeyFiles;
pub use pem_encryption::KdfParams;

pub mod algorithm;
pub mod codec;
pub mod key_files;
pub mod keygen;
pub mod marshal;
pub mod pem_encryption;
pub mod private_block;
pub mod public_record;

/// Private key material for one algorithm.
pub enum KeyMaterial {
    Rsa(rsa::RsaPrivateKey),
    Ecdsa(p256::SecretKey),
    Ed25519(ed25519_dalek::SigningKey),
}

impl KeyMaterial {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyMaterial::Rsa(_) => KeyAlgorithm::Rsa,
            KeyMaterial::Ecdsa(_) => KeyAlgorithm::Ecdsa,
            KeyMaterial::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyMaterial::Rsa(key) => PublicKey::Rsa(key.to_public_key()),
            KeyMaterial::Ecdsa(key) => PublicKey::Ecdsa(key.public_key()),
            KeyMaterial::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
        }
    }
}

impl PartialEq for KeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (KeyMaterial::Rsa(a), KeyMaterial::Rsa(b)) => a == b,
            (KeyMaterial::Ecdsa(a), KeyMaterial::Ecdsa(b)) => a == b,
            (KeyMaterial::Ed25519(a), KeyMaterial::Ed25519(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for KeyMaterial {}

/// Public half of an identity key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(rsa::RsaPublicKey),
    Ecdsa(p256::PublicKey),
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl PublicKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PublicKey::Rsa(_) => KeyAlgorithm::Rsa,
            PublicKey::Ecdsa(_) => KeyAlgorithm::Ecdsa,
            PublicKey::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// Renders this key as a one-line public record.
    pub fn to_record(&self) -> Result<String, IdentityKeyError> {
        public_record::encode_public_record(self)
    }
}

/// An asymmetric key pair tagged with its algorithm.
///
/// The material is fixed at construction. Re-keying means generating a new `IdentityKey`.
#[derive(PartialEq, Eq)]
pub struct IdentityKey {
    material: KeyMaterial,
}

impl IdentityKey {
    /// Generates a fresh identity key for `algorithm`.
    ///
    /// `rsa_bits` is only consulted for RSA keys.
    pub fn new<R: CryptoRngCore + ?Sized>(
        log: &Logger,
        algorithm: KeyAlgorithm,
        rsa_bits: usize,
        rng: &mut R,
    ) -> Result<Self, IdentityKeyError> {
        debug!(log, "Generating a fresh {} identity key.", algorithm);
        let material = match algorithm {
            KeyAlgorithm::Rsa => keygen::generate_rsa(rng, rsa_bits).map(KeyMaterial::Rsa),
            KeyAlgorithm::Ecdsa => keygen::generate_ecdsa(rng).map(KeyMaterial::Ecdsa),
            KeyAlgorithm::Ed25519 => keygen::generate_ed25519(rng).map(KeyMaterial::Ed25519),
        }
        .map_err(|err| GenerationFailure(algorithm, err))?;
        Ok(Self { material })
    }

    pub fn from_config<R: CryptoRngCore + ?Sized>(
        log: &Logger,
        config: &KeyGenConfiguration,
        rng: &mut R,
    ) -> Result<Self, IdentityKeyError> {
        Self::new(log, config.algorithm, config.rsa_bits, rng)
    }

    /// Decrypts an armored private block. The inverse of [`IdentityKey::private_block`].
    pub fn from_private_block(block: &str, password: &str) -> Result<Self, IdentityKeyError> {
        let material = private_block::parse_private_block(block, password)?;
        Ok(Self { material })
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.material.algorithm()
    }

    /// The header token used in encoded records, e.g. `ac-rsa`.
    pub fn algorithm_tag(&self) -> &'static str {
        self.algorithm().tag()
    }

    pub fn public_half(&self) -> PublicKey {
        self.material.public_key()
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn public_record(&self) -> Result<String, IdentityKeyError> {
        public_record::encode_public_record(&self.public_half())
    }

    /// Encrypts the private half under `password` and returns the armored block.
    pub fn private_block<R: CryptoRngCore + ?Sized>(
        &self,
        password: &str,
        kdf: KdfParams,
        rng: &mut R,
    ) -> Result<String, IdentityKeyError> {
        private_block::encode_private_block(&self.material, password, kdf, rng)
    }

    /// Writes the public record to `sink` in a single write. Nothing is written if encoding fails.
    pub fn write_public_record<W: Write>(&self, sink: &mut W) -> Result<(), IdentityKeyError> {
        let record = self.public_record()?;
        write_all(sink, record.as_bytes())
    }

    /// Writes the armored private block to `sink` in a single write. Nothing is written if
    /// encoding or encryption fails.
    pub fn write_private_block<W: Write, R: CryptoRngCore + ?Sized>(
        &self,
        sink: &mut W,
        password: &str,
        kdf: KdfParams,
        rng: &mut R,
    ) -> Result<(), IdentityKeyError> {
        let block = self.private_block(password, kdf, rng)?;
        write_all(sink, block.as_bytes())
    }
}

impl fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

fn write_all<W: Write>(sink: &mut W, bytes: &[u8]) -> Result<(), IdentityKeyError> {
    sink.write_all(bytes)
        .and_then(|()| sink.flush())
        .map_err(|err| IoError::new(WriteSinkFailed(err)).into())
}

use super::{public_record, IdentityKey, KdfParams, PublicKey};
use crate::error::identity_key::IdentityKeyError;
use crate::error::identity_key::IdentityKeyError::KeyFilesMismatch;
use crate::error::io::IoError;
use crate::error::io::IoErrorKind::AlreadyExists;
use rand_core::CryptoRngCore;
use slog::{debug, info, trace, Logger};
use std::path::{Path, PathBuf};

pub const PUBLIC_KEY_EXTENSION: &str = "pub";

/// Owner read/write only.
pub const PRIVATE_KEY_MODE: u32 = 0o600;
/// World readable, owner writable.
pub const PUBLIC_KEY_MODE: u32 = 0o644;

/// The pair of files an identity key is persisted to: the armored private block at `prefix`
/// and the public record at `prefix.pub`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityKeyFiles {
    private_path: PathBuf,
    public_path: PathBuf,
}

impl IdentityKeyFiles {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        let private_path = prefix.into();
        let mut public_path = private_path.clone().into_os_string();
        public_path.push(".");
        public_path.push(PUBLIC_KEY_EXTENSION);
        Self {
            private_path,
            public_path: PathBuf::from(public_path),
        }
    }

    pub fn private_path(&self) -> &Path {
        &self.private_path
    }

    pub fn public_path(&self) -> &Path {
        &self.public_path
    }

    /// Fails with an "already exists" [`IoError`] if either file is present.
    pub fn ensure_absent(&self) -> Result<(), IdentityKeyError> {
        for path in [&self.private_path, &self.public_path] {
            if path.exists() {
                return Err(IoError::new(AlreadyExists(path.clone())).into());
            }
        }
        Ok(())
    }

    /// Encodes both halves of `key` and writes them out.
    ///
    /// Both records are fully encoded before either file is touched, and each file is replaced
    /// atomically. Existing files are only replaced when `overwrite` is set.
    pub fn save<R: CryptoRngCore + ?Sized>(
        &self,
        log: &Logger,
        key: &IdentityKey,
        password: &str,
        kdf: KdfParams,
        rng: &mut R,
        overwrite: bool,
    ) -> Result<(), IdentityKeyError> {
        if !overwrite {
            self.ensure_absent()?;
        }

        let public_record = key.public_record()?;
        let private_block = key.private_block(password, kdf, rng)?;
        trace!(
            log,
            "Encoded {} identity key ({} byte public record, {} byte private block).",
            key.algorithm(),
            public_record.len(),
            private_block.len()
        );

        crate::fs::write_atomic(&self.private_path, private_block.as_bytes(), PRIVATE_KEY_MODE)?;
        crate::fs::write_atomic(&self.public_path, public_record.as_bytes(), PUBLIC_KEY_MODE)?;

        info!(
            log,
            "Saved {} identity key to {} and {}.",
            key.algorithm(),
            self.private_path.display(),
            self.public_path.display()
        );
        Ok(())
    }

    /// Reads only the public record.
    pub fn load_public(&self, log: &Logger) -> Result<PublicKey, IdentityKeyError> {
        debug!(log, "Loading public key from {}.", self.public_path.display());
        let record = crate::fs::read_to_string(&self.public_path)?;
        public_record::parse_public_record(&record)
    }

    /// Decrypts the private block without consulting the public record.
    pub fn load_private(
        &self,
        log: &Logger,
        password: &str,
    ) -> Result<IdentityKey, IdentityKeyError> {
        debug!(log, "Loading private key from {}.", self.private_path.display());
        let block = crate::fs::read_to_string(&self.private_path)?;
        IdentityKey::from_private_block(&block, password)
    }

    /// Decrypts the private block with `password` and checks it against the public record.
    pub fn load(&self, log: &Logger, password: &str) -> Result<IdentityKey, IdentityKeyError> {
        let key = self.load_private(log, password)?;

        let stored_public = self.load_public(log)?;
        if stored_public != key.public_half() {
            return Err(KeyFilesMismatch(
                self.public_path.clone(),
                self.private_path.clone(),
            ));
        }
        debug!(log, "Loaded {} identity key.", key.algorithm());
        Ok(key)
    }

    /// Re-encrypts the private block under `new_password`. The public record is left untouched.
    pub fn change_password<R: CryptoRngCore + ?Sized>(
        &self,
        log: &Logger,
        old_password: &str,
        new_password: &str,
        kdf: KdfParams,
        rng: &mut R,
    ) -> Result<(), IdentityKeyError> {
        let key = self.load(log, old_password)?;
        let private_block = key.private_block(new_password, kdf, rng)?;
        crate::fs::write_atomic(&self.private_path, private_block.as_bytes(), PRIVATE_KEY_MODE)?;
        info!(
            log,
            "Changed the password of {}.",
            self.private_path.display()
        );
        Ok(())
    }
}

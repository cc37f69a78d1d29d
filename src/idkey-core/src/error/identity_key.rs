use crate::error::encoding::EncodingError;
use crate::error::encryption::EncryptionError;
use crate::error::generate_key::GenerateKeyError;
use crate::error::io::IoError;
use crate::error::marshal::MarshalError;
use crate::identity::KeyAlgorithm;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityKeyError {
    #[error("Unsupported key algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("Failed to generate {0} key")]
    GenerationFailure(KeyAlgorithm, #[source] GenerateKeyError),

    #[error("Failed to marshal {0} key")]
    MarshalFailure(KeyAlgorithm, #[source] MarshalError),

    #[error("Failed to encode key record")]
    EncodingFailure(#[source] EncodingError),

    #[error("Failed to encrypt or decrypt private key")]
    EncryptionFailure(#[source] EncryptionError),

    #[error("Failed to access key storage")]
    IoFailure(#[from] IoError),

    #[error("Public key in '{0}' does not match the private key in '{1}'")]
    KeyFilesMismatch(PathBuf, PathBuf),
}

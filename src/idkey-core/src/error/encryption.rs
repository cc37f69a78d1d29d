use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("Failed to decrypt content")]
    DecryptContentFailed(#[source] aes_gcm::Error),

    #[error("Failed to encrypt content")]
    EncryptContentFailed(#[source] aes_gcm::Error),

    #[error("Failed to hash password")]
    HashPasswordFailed(#[source] argon2::Error),

    #[error("Invalid key derivation parameters")]
    InvalidKdfParams(#[source] argon2::Error),

    #[error("Key derivation iteration count of {0} exceeds the supported maximum")]
    KdfIterationsTooLarge(u32),

    #[error("Key derivation memory cost of {0} KiB exceeds the supported maximum")]
    KdfMemoryTooLarge(u32),

    #[error("Key derivation parallelism of {0} lanes exceeds the supported maximum")]
    KdfParallelismTooLarge(u32),

    #[error("Failed to generate nonce")]
    NonceGenerationFailed(#[source] rand_core::Error),

    #[error("Failed to generate salt")]
    SaltGenerationFailed(#[source] rand_core::Error),

    #[error("Encrypted payload is truncated ({0} bytes)")]
    TruncatedPayload(usize),

    #[error("Unsupported encrypted payload version {0}")]
    UnsupportedPayloadVersion(u8),
}

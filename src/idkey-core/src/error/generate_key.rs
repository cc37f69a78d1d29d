use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateKeyError {
    #[error("Randomness source yielded no valid P-256 scalar after {0} attempts")]
    EcdsaScalarOutOfRange(usize),

    #[error("Failed to generate RSA key")]
    GenerateRsaKeyFailed(#[source] rsa::Error),

    #[error("Randomness source failed")]
    RandomnessFailed(#[source] rand_core::Error),

    #[error("RSA modulus of {0} bits is not supported (expected 2048 to 8192 bits, in whole bytes)")]
    UnsupportedRsaKeySize(usize),
}

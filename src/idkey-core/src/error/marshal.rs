use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarshalError {
    #[error("Failed to decode key bytes envelope")]
    DecodeEnvelopeFailed(#[source] der::Error),

    #[error("Failed to decode PKCS#1 private key")]
    DecodePkcs1Failed(#[source] rsa::pkcs1::Error),

    #[error("Failed to decode SubjectPublicKeyInfo")]
    DecodePublicKeyInfoFailed(#[source] rsa::pkcs8::spki::Error),

    #[error("Failed to decode SEC1 private key")]
    DecodeSec1Failed(#[source] p256::elliptic_curve::Error),

    #[error("Failed to encode key bytes envelope")]
    EncodeEnvelopeFailed(#[source] der::Error),

    #[error("Failed to encode PKCS#1 private key")]
    EncodePkcs1Failed(#[source] rsa::pkcs1::Error),

    #[error("Failed to encode SubjectPublicKeyInfo")]
    EncodePublicKeyInfoFailed(#[source] rsa::pkcs8::spki::Error),

    #[error("Failed to encode SEC1 private key")]
    EncodeSec1Failed(#[source] der::Error),

    #[error("Invalid Ed25519 public key")]
    InvalidEd25519PublicKey(#[source] ed25519_dalek::SignatureError),

    #[error("Expected {expected} key bytes, found {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

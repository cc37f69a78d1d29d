//! Binary (DER) forms of identity keys.
//!
//! | algorithm | public half             | private half                     |
//! |-----------|-------------------------|----------------------------------|
//! | RSA       | SubjectPublicKeyInfo    | PKCS#1 `RSAPrivateKey`           |
//! | ECDSA     | SubjectPublicKeyInfo    | SEC1 `ECPrivateKey`              |
//! | Ed25519   | OCTET STRING(public 32) | OCTET STRING(secret seed 32)     |
use super::{KeyAlgorithm, KeyMaterial, PublicKey};
use crate::error::marshal::MarshalError;
use crate::error::marshal::MarshalError::{
    DecodeEnvelopeFailed, DecodePkcs1Failed, DecodePublicKeyInfoFailed, DecodeSec1Failed,
    EncodeEnvelopeFailed, EncodePkcs1Failed, EncodePublicKeyInfoFailed, EncodeSec1Failed,
    InvalidEd25519PublicKey, InvalidKeyLength,
};
use der::asn1::OctetStringRef;
use der::{Decode, Encode};
use ed25519_dalek::{SigningKey, VerifyingKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

pub fn marshal_public_key(key: &PublicKey) -> Result<Vec<u8>, MarshalError> {
    match key {
        PublicKey::Rsa(key) => key
            .to_public_key_der()
            .map(|doc| doc.into_vec())
            .map_err(EncodePublicKeyInfoFailed),
        PublicKey::Ecdsa(key) => key
            .to_public_key_der()
            .map(|doc| doc.into_vec())
            .map_err(EncodePublicKeyInfoFailed),
        PublicKey::Ed25519(key) => wrap_envelope(key.as_bytes()),
    }
}

pub fn unmarshal_public_key(
    algorithm: KeyAlgorithm,
    der: &[u8],
) -> Result<PublicKey, MarshalError> {
    match algorithm {
        KeyAlgorithm::Rsa => RsaPublicKey::from_public_key_der(der)
            .map(PublicKey::Rsa)
            .map_err(DecodePublicKeyInfoFailed),
        KeyAlgorithm::Ecdsa => p256::PublicKey::from_public_key_der(der)
            .map(PublicKey::Ecdsa)
            .map_err(DecodePublicKeyInfoFailed),
        KeyAlgorithm::Ed25519 => {
            let bytes = unwrap_envelope::<PUBLIC_KEY_LENGTH>(der)?;
            VerifyingKey::from_bytes(&bytes)
                .map(PublicKey::Ed25519)
                .map_err(InvalidEd25519PublicKey)
        }
    }
}

pub fn marshal_private_key(material: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>, MarshalError> {
    match material {
        KeyMaterial::Rsa(key) => key
            .to_pkcs1_der()
            .map(|doc| Zeroizing::new(doc.as_bytes().to_vec()))
            .map_err(EncodePkcs1Failed),
        KeyMaterial::Ecdsa(key) => key.to_sec1_der().map_err(EncodeSec1Failed),
        KeyMaterial::Ed25519(key) => wrap_envelope(key.as_bytes()).map(Zeroizing::new),
    }
}

pub fn unmarshal_private_key(
    algorithm: KeyAlgorithm,
    der: &[u8],
) -> Result<KeyMaterial, MarshalError> {
    match algorithm {
        KeyAlgorithm::Rsa => RsaPrivateKey::from_pkcs1_der(der)
            .map(KeyMaterial::Rsa)
            .map_err(DecodePkcs1Failed),
        KeyAlgorithm::Ecdsa => p256::SecretKey::from_sec1_der(der)
            .map(KeyMaterial::Ecdsa)
            .map_err(DecodeSec1Failed),
        KeyAlgorithm::Ed25519 => {
            let seed = Zeroizing::new(unwrap_envelope::<SECRET_KEY_LENGTH>(der)?);
            Ok(KeyMaterial::Ed25519(SigningKey::from_bytes(&seed)))
        }
    }
}

fn wrap_envelope(bytes: &[u8]) -> Result<Vec<u8>, MarshalError> {
    OctetStringRef::new(bytes)
        .and_then(|octets| octets.to_der())
        .map_err(EncodeEnvelopeFailed)
}

fn unwrap_envelope<const N: usize>(der: &[u8]) -> Result<[u8; N], MarshalError> {
    let octets = OctetStringRef::from_der(der).map_err(DecodeEnvelopeFailed)?;
    <[u8; N]>::try_from(octets.as_bytes()).map_err(|_| InvalidKeyLength {
        expected: N,
        actual: octets.as_bytes().len(),
    })
}

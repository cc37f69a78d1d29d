//! Armored, password-protected private key blocks.
use super::{marshal, pem_encryption, KdfParams, KeyAlgorithm, KeyMaterial};
use crate::error::encoding::EncodingError::ParseArmorFailed;
use crate::error::identity_key::IdentityKeyError;
use crate::error::identity_key::IdentityKeyError::{
    EncodingFailure, EncryptionFailure, MarshalFailure,
};
use pem::{EncodeConfig, LineEnding, Pem};
use rand_core::CryptoRngCore;

/// Marshals `material`, seals it under `password` and wraps the result in a PEM block labeled
/// with the algorithm. The label doubles as associated data, so a block cannot be relabeled.
pub fn encode_private_block<R: CryptoRngCore + ?Sized>(
    material: &KeyMaterial,
    password: &str,
    kdf: KdfParams,
    rng: &mut R,
) -> Result<String, IdentityKeyError> {
    let algorithm = material.algorithm();
    let der = marshal::marshal_private_key(material)
        .map_err(|err| MarshalFailure(algorithm, err))?;
    let label = algorithm.pem_label();
    let contents = pem_encryption::encrypt(&der, label.as_bytes(), password, kdf, rng)
        .map_err(EncryptionFailure)?;

    Ok(pem::encode_config(
        &Pem {
            tag: label.to_string(),
            contents,
        },
        EncodeConfig {
            line_ending: LineEnding::LF,
        },
    ))
}

pub fn parse_private_block(block: &str, password: &str) -> Result<KeyMaterial, IdentityKeyError> {
    let pem = pem::parse(block).map_err(|err| EncodingFailure(ParseArmorFailed(err)))?;
    let algorithm = KeyAlgorithm::from_pem_label(&pem.tag)?;
    let der = pem_encryption::decrypt(&pem.contents, pem.tag.as_bytes(), password)
        .map_err(EncryptionFailure)?;
    marshal::unmarshal_private_key(algorithm, &der).map_err(|err| MarshalFailure(algorithm, err))
}

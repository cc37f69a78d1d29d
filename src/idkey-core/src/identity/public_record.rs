//! One-line public key records: `<tag> <base64(zlib(der))>`.
use super::{codec, marshal, KeyAlgorithm, PublicKey};
use crate::error::encoding::EncodingError::MissingRecordSeparator;
use crate::error::identity_key::IdentityKeyError;
use crate::error::identity_key::IdentityKeyError::{EncodingFailure, MarshalFailure};

pub fn encode_public_record(key: &PublicKey) -> Result<String, IdentityKeyError> {
    let algorithm = key.algorithm();
    let der = marshal::marshal_public_key(key).map_err(|err| MarshalFailure(algorithm, err))?;
    let compressed = codec::compress(&der).map_err(EncodingFailure)?;
    Ok(format!(
        "{} {}",
        algorithm.tag(),
        codec::encode_text(&compressed)
    ))
}

/// Parses a record produced by [`encode_public_record`]. Trailing whitespace, such as the
/// newline a text editor adds, is ignored.
pub fn parse_public_record(record: &str) -> Result<PublicKey, IdentityKeyError> {
    let (header, body) = record
        .trim_end()
        .split_once(' ')
        .ok_or(EncodingFailure(MissingRecordSeparator()))?;
    let algorithm = KeyAlgorithm::from_tag(header)?;
    let compressed = codec::decode_text(body).map_err(EncodingFailure)?;
    let der = codec::decompress(&compressed).map_err(EncodingFailure)?;
    marshal::unmarshal_public_key(algorithm, &der).map_err(|err| MarshalFailure(algorithm, err))
}

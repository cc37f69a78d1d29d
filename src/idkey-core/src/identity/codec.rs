use crate::error::encoding::EncodingError;
use crate::error::encoding::EncodingError::{
    CompressFailed, DecodeBase64Failed, DecompressFailed, DecompressedTooLarge,
};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Upper bound on the size of a decompressed key. Far above any supported key.
pub const MAX_DECOMPRESSED_LEN: usize = 64 * 1024;

pub fn compress(bytes: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes).map_err(CompressFailed)?;
    encoder.finish().map_err(CompressFailed)
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let mut decompressed = Vec::new();
    ZlibDecoder::new(bytes)
        .take(MAX_DECOMPRESSED_LEN as u64 + 1)
        .read_to_end(&mut decompressed)
        .map_err(DecompressFailed)?;
    if decompressed.len() > MAX_DECOMPRESSED_LEN {
        return Err(DecompressedTooLarge(MAX_DECOMPRESSED_LEN));
    }
    Ok(decompressed)
}

pub fn encode_text(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

pub fn decode_text(text: &str) -> Result<Vec<u8>, EncodingError> {
    base64::decode(text).map_err(DecodeBase64Failed)
}

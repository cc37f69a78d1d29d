use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to compress key bytes")]
    CompressFailed(#[source] std::io::Error),

    #[error("Failed to decode base64 text")]
    DecodeBase64Failed(#[source] base64::DecodeError),

    #[error("Failed to decompress key bytes")]
    DecompressFailed(#[source] std::io::Error),

    #[error("Decompressed key exceeds {0} bytes")]
    DecompressedTooLarge(usize),

    #[error("Public key record is missing the space between header and body")]
    MissingRecordSeparator(),

    #[error("Failed to parse armored private key block")]
    ParseArmorFailed(#[source] pem::PemError),
}

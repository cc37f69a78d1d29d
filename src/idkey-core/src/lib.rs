pub mod config;
pub mod error;
pub mod fs;
pub mod identity;
pub mod json;

pub use identity::{
    IdentityKey, IdentityKeyFiles, KdfParams, KeyAlgorithm, KeyMaterial, PublicKey,
};

//! Fresh key pair generation, one routine per algorithm.
//!
//! Every routine draws its randomness from the handle it is given and never from a global source.
use crate::error::generate_key::GenerateKeyError;
use crate::error::generate_key::GenerateKeyError::{
    EcdsaScalarOutOfRange, GenerateRsaKeyFailed, RandomnessFailed, UnsupportedRsaKeySize,
};
use ed25519_dalek::{SigningKey, SECRET_KEY_LENGTH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::CryptoRngCore;
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

pub const DEFAULT_RSA_BITS: usize = 2048;
pub const MIN_RSA_BITS: usize = 2048;
pub const MAX_RSA_BITS: usize = 8192;

const ECDSA_SCALAR_ATTEMPTS: usize = 64;

/// Prime search only uses infallible draws, so it runs on a generator seeded from a single
/// fallible draw on `rng`.
pub fn generate_rsa<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<RsaPrivateKey, GenerateKeyError> {
    if !(MIN_RSA_BITS..=MAX_RSA_BITS).contains(&bits) || bits % 8 != 0 {
        return Err(UnsupportedRsaKeySize(bits));
    }
    let mut seed = Zeroizing::new(<StdRng as SeedableRng>::Seed::default());
    rng.try_fill_bytes(&mut *seed).map_err(RandomnessFailed)?;
    let mut prime_rng = StdRng::from_seed(*seed);
    RsaPrivateKey::new(&mut prime_rng, bits).map_err(GenerateRsaKeyFailed)
}

/// Generates a P-256 secret scalar by rejection sampling uniformly random field bytes.
pub fn generate_ecdsa<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
) -> Result<p256::SecretKey, GenerateKeyError> {
    let mut bytes = Zeroizing::new([0u8; 32]);
    for _ in 0..ECDSA_SCALAR_ATTEMPTS {
        rng.try_fill_bytes(&mut *bytes).map_err(RandomnessFailed)?;
        // zero and values at or above the group order are rejected
        if let Ok(secret) = p256::SecretKey::from_bytes(p256::FieldBytes::from_slice(&*bytes)) {
            return Ok(secret);
        }
    }
    Err(EcdsaScalarOutOfRange(ECDSA_SCALAR_ATTEMPTS))
}

pub fn generate_ed25519<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
) -> Result<SigningKey, GenerateKeyError> {
    let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
    rng.try_fill_bytes(&mut *seed).map_err(RandomnessFailed)?;
    Ok(SigningKey::from_bytes(&seed))
}

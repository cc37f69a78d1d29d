//! Password-based authenticated encryption of private key bytes.
//!
//! The key is derived with Argon2id and the content sealed with AES-256-GCM. The derivation
//! parameters, salt and nonce travel in front of the ciphertext so a block can be opened with
//! nothing but the password:
//!
//! ```text
//! version(1) | m_cost(4, BE) | t_cost(4, BE) | p_cost(4, BE) | salt(32) | nonce(12) | ciphertext+tag
//! ```
use crate::error::encryption::EncryptionError;
use crate::error::encryption::EncryptionError::{
    DecryptContentFailed, EncryptContentFailed, HashPasswordFailed, InvalidKdfParams,
    KdfIterationsTooLarge, KdfMemoryTooLarge, KdfParallelismTooLarge, NonceGenerationFailed,
    SaltGenerationFailed, TruncatedPayload, UnsupportedPayloadVersion,
};
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use argon2::Argon2;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

const PAYLOAD_VERSION: u8 = 1;
const SALT_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;
const HEADER_LEN: usize = 1 + 3 * 4 + SALT_LEN + NONCE_LEN;

// Blocks asking for more than these are refused before any derivation is attempted.
pub const MAX_MEMORY_KIB: u32 = 2 * 1024 * 1024;
pub const MAX_ITERATIONS: u32 = 64;
pub const MAX_PARALLELISM: u32 = 64;

/// Argon2id cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 64000,
            iterations: 3,
            parallelism: 1,
        }
    }
}

impl KdfParams {
    fn to_argon_params(self) -> Result<argon2::Params, EncryptionError> {
        if self.memory_kib > MAX_MEMORY_KIB {
            return Err(KdfMemoryTooLarge(self.memory_kib));
        }
        if self.iterations > MAX_ITERATIONS {
            return Err(KdfIterationsTooLarge(self.iterations));
        }
        if self.parallelism > MAX_PARALLELISM {
            return Err(KdfParallelismTooLarge(self.parallelism));
        }
        argon2::Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(KEY_LEN),
        )
        .map_err(InvalidKdfParams)
    }
}

fn derive_key(
    password: &str,
    salt: &[u8],
    params: KdfParams,
) -> Result<Zeroizing<[u8; KEY_LEN]>, EncryptionError> {
    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params.to_argon_params()?,
    );
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut *key)
        .map_err(HashPasswordFailed)?;
    Ok(key)
}

/// Seals `content` under a key derived from `password`. `associated_data` is authenticated
/// but not stored; the same bytes must be presented to [`decrypt`].
pub fn encrypt<R: CryptoRngCore + ?Sized>(
    content: &[u8],
    associated_data: &[u8],
    password: &str,
    params: KdfParams,
    rng: &mut R,
) -> Result<Vec<u8>, EncryptionError> {
    let mut salt = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut salt).map_err(SaltGenerationFailed)?;
    let mut nonce = [0u8; NONCE_LEN];
    rng.try_fill_bytes(&mut nonce).map_err(NonceGenerationFailed)?;

    let key = derive_key(password, &salt, params)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&*key));
    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: content,
                aad: associated_data,
            },
        )
        .map_err(EncryptContentFailed)?;

    let mut payload = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    payload.push(PAYLOAD_VERSION);
    payload.extend_from_slice(&params.memory_kib.to_be_bytes());
    payload.extend_from_slice(&params.iterations.to_be_bytes());
    payload.extend_from_slice(&params.parallelism.to_be_bytes());
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(payload)
}

/// Opens a payload produced by [`encrypt`]. A wrong password, altered bytes or different
/// associated data all fail with [`EncryptionError::DecryptContentFailed`].
pub fn decrypt(
    payload: &[u8],
    associated_data: &[u8],
    password: &str,
) -> Result<Zeroizing<Vec<u8>>, EncryptionError> {
    if payload.len() < HEADER_LEN + TAG_LEN {
        return Err(TruncatedPayload(payload.len()));
    }
    let (header, ciphertext) = payload.split_at(HEADER_LEN);
    if header[0] != PAYLOAD_VERSION {
        return Err(UnsupportedPayloadVersion(header[0]));
    }
    let params = KdfParams {
        memory_kib: read_u32(&header[1..5]),
        iterations: read_u32(&header[5..9]),
        parallelism: read_u32(&header[9..13]),
    };
    let salt = &header[13..13 + SALT_LEN];
    let nonce = &header[13 + SALT_LEN..];

    let key = derive_key(password, salt, params)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&*key));
    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: associated_data,
            },
        )
        .map(Zeroizing::new)
        .map_err(DecryptContentFailed)
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_be_bytes(buf)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::identity::test::TEST_KDF;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]
        #[test]
        fn decrypt_reverts_encrypt(pass in ".*", content in ".*", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let encrypted = encrypt(content.as_bytes(), b"label", &pass, TEST_KDF, &mut rng).unwrap();
            let decrypted = decrypt(&encrypted, b"label", &pass).unwrap();

            prop_assert_eq!(content.as_bytes(), decrypted.as_slice());
        }
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut rng = StdRng::seed_from_u64(31);
        let encrypted = encrypt(b"secret", b"", "correct-horse", TEST_KDF, &mut rng).unwrap();
        assert!(matches!(
            decrypt(&encrypted, b"", "wrong-password"),
            Err(DecryptContentFailed(_))
        ));
    }

    #[test]
    fn associated_data_is_authenticated() {
        let mut rng = StdRng::seed_from_u64(32);
        let encrypted = encrypt(b"secret", b"RSA PRIVATE KEY", "pw", TEST_KDF, &mut rng).unwrap();
        assert!(matches!(
            decrypt(&encrypted, b"ECDSA PRIVATE KEY", "pw"),
            Err(DecryptContentFailed(_))
        ));
    }

    #[test]
    fn tampering_is_detected() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut encrypted = encrypt(b"secret", b"", "pw", TEST_KDF, &mut rng).unwrap();
        let last = encrypted.len() - 1;
        encrypted[last] ^= 1;
        assert!(matches!(
            decrypt(&encrypted, b"", "pw"),
            Err(DecryptContentFailed(_))
        ));
    }

    #[test]
    fn salt_and_nonce_are_fresh_per_encryption() {
        let mut rng = StdRng::seed_from_u64(34);
        let a = encrypt(b"secret", b"", "pw", TEST_KDF, &mut rng).unwrap();
        let b = encrypt(b"secret", b"", "pw", TEST_KDF, &mut rng).unwrap();
        assert_ne!(a[13..HEADER_LEN], b[13..HEADER_LEN]);
        assert_ne!(a, b);
    }

    #[test]
    fn parameters_are_embedded() {
        let mut rng = StdRng::seed_from_u64(35);
        let encrypted = encrypt(b"secret", b"", "pw", TEST_KDF, &mut rng).unwrap();
        assert_eq!(encrypted[0], PAYLOAD_VERSION);
        assert_eq!(read_u32(&encrypted[1..5]), TEST_KDF.memory_kib);
        assert_eq!(read_u32(&encrypted[5..9]), TEST_KDF.iterations);
        assert_eq!(read_u32(&encrypted[9..13]), TEST_KDF.parallelism);
        assert_eq!(encrypted.len(), HEADER_LEN + b"secret".len() + TAG_LEN);
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(matches!(
            decrypt(&[PAYLOAD_VERSION; 10], b"", "pw"),
            Err(TruncatedPayload(10))
        ));

        let mut rng = StdRng::seed_from_u64(36);
        let mut encrypted = encrypt(b"secret", b"", "pw", TEST_KDF, &mut rng).unwrap();
        encrypted[0] = 9;
        assert!(matches!(
            decrypt(&encrypted, b"", "pw"),
            Err(UnsupportedPayloadVersion(9))
        ));

        encrypted[0] = PAYLOAD_VERSION;
        encrypted[1..5].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(matches!(
            decrypt(&encrypted, b"", "pw"),
            Err(KdfMemoryTooLarge(u32::MAX))
        ));

        encrypted[1..5].copy_from_slice(&TEST_KDF.memory_kib.to_be_bytes());
        encrypted[5..9].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(matches!(
            decrypt(&encrypted, b"", "pw"),
            Err(KdfIterationsTooLarge(u32::MAX))
        ));

        encrypted[5..9].copy_from_slice(&TEST_KDF.iterations.to_be_bytes());
        encrypted[9..13].copy_from_slice(&(MAX_PARALLELISM + 1).to_be_bytes());
        assert!(matches!(
            decrypt(&encrypted, b"", "pw"),
            Err(KdfParallelismTooLarge(p)) if p == MAX_PARALLELISM + 1
        ));
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let params = KdfParams {
            memory_kib: 64,
            iterations: 0,
            parallelism: 1,
        };
        let mut rng = StdRng::seed_from_u64(37);
        assert!(matches!(
            encrypt(b"secret", b"", "pw", params, &mut rng),
            Err(InvalidKdfParams(_))
        ));

        let params = KdfParams {
            iterations: MAX_ITERATIONS + 1,
            ..TEST_KDF
        };
        assert!(matches!(
            encrypt(b"secret", b"", "pw", params, &mut rng),
            Err(KdfIterationsTooLarge(_))
        ));
    }
}

use idkey_core::error::encryption::EncryptionError;
use idkey_core::error::identity_key::IdentityKeyError;
use idkey_core::error::io::IoErrorKind;
use idkey_core::identity::keygen::DEFAULT_RSA_BITS;
use idkey_core::{IdentityKey, IdentityKeyFiles, KdfParams, KeyAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slog::Logger;

const KDF: KdfParams = KdfParams {
    memory_kib: 64,
    iterations: 1,
    parallelism: 1,
};

fn logger() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}

fn generate(algorithm: KeyAlgorithm, rng: &mut StdRng) -> IdentityKey {
    IdentityKey::new(&logger(), algorithm, DEFAULT_RSA_BITS, rng).unwrap()
}

#[test]
fn saved_keys_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    for algorithm in KeyAlgorithm::ALL {
        let files = IdentityKeyFiles::new(dir.path().join(algorithm.name()));
        let key = generate(algorithm, &mut rng);
        files
            .save(&logger(), &key, "hunter2", KDF, &mut rng, false)
            .unwrap();

        let record = std::fs::read_to_string(files.public_path()).unwrap();
        assert!(record.starts_with(&format!("{} ", algorithm.tag())));
        let block = std::fs::read_to_string(files.private_path()).unwrap();
        assert!(block.starts_with(&format!("-----BEGIN {}-----", algorithm.pem_label())));

        assert_eq!(files.load_public(&logger()).unwrap(), key.public_half());
        assert_eq!(files.load(&logger(), "hunter2").unwrap(), key);
    }
}

#[test]
fn missing_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("a").join("b").join("id"));
    let mut rng = StdRng::seed_from_u64(2);
    let key = generate(KeyAlgorithm::Ed25519, &mut rng);
    files.save(&logger(), &key, "pw", KDF, &mut rng, false).unwrap();
    assert!(files.private_path().is_file());
    assert!(files.public_path().is_file());
}

#[cfg(unix)]
#[test]
fn files_get_distinct_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let mut rng = StdRng::seed_from_u64(3);
    let key = generate(KeyAlgorithm::Ecdsa, &mut rng);
    files.save(&logger(), &key, "pw", KDF, &mut rng, false).unwrap();

    let mode = |path: &std::path::Path| {
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    };
    assert_eq!(mode(files.private_path()), 0o600);
    assert_eq!(mode(files.public_path()), 0o644);
}

#[test]
fn existing_files_are_kept_unless_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let mut rng = StdRng::seed_from_u64(4);
    let first = generate(KeyAlgorithm::Ed25519, &mut rng);
    let second = generate(KeyAlgorithm::Ed25519, &mut rng);

    files.save(&logger(), &first, "pw", KDF, &mut rng, false).unwrap();
    let err = files
        .save(&logger(), &second, "pw", KDF, &mut rng, false)
        .unwrap_err();
    match err {
        IdentityKeyError::IoFailure(err) => {
            assert!(matches!(err.kind(), IoErrorKind::AlreadyExists(_)))
        }
        other => panic!("expected IoFailure, got {other:?}"),
    }
    assert_eq!(files.load(&logger(), "pw").unwrap(), first);

    files.save(&logger(), &second, "pw", KDF, &mut rng, true).unwrap();
    assert_eq!(files.load(&logger(), "pw").unwrap(), second);
}

#[test]
fn wrong_password_leaves_files_intact() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let mut rng = StdRng::seed_from_u64(5);
    let key = generate(KeyAlgorithm::Rsa, &mut rng);
    files
        .save(&logger(), &key, "correct-horse", KDF, &mut rng, false)
        .unwrap();
    let before = std::fs::read(files.private_path()).unwrap();

    assert!(matches!(
        files.load(&logger(), "wrong-password"),
        Err(IdentityKeyError::EncryptionFailure(
            EncryptionError::DecryptContentFailed(_)
        ))
    ));
    assert_eq!(std::fs::read(files.private_path()).unwrap(), before);
    assert_eq!(files.load(&logger(), "correct-horse").unwrap(), key);
}

#[test]
fn mismatched_public_record_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let other = IdentityKeyFiles::new(dir.path().join("other"));
    let key = generate(KeyAlgorithm::Ed25519, &mut rng);
    files
        .save(&logger(), &key, "pw", KDF, &mut rng, false)
        .unwrap();
    let key = generate(KeyAlgorithm::Ed25519, &mut rng);
    other
        .save(&logger(), &key, "pw", KDF, &mut rng, false)
        .unwrap();

    std::fs::copy(other.public_path(), files.public_path()).unwrap();
    assert!(matches!(
        files.load(&logger(), "pw"),
        Err(IdentityKeyError::KeyFilesMismatch(..))
    ));
}

#[test]
fn missing_files_are_io_failures() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("absent"));
    assert!(matches!(
        files.load(&logger(), "pw"),
        Err(IdentityKeyError::IoFailure(_))
    ));
    assert!(matches!(
        files.load_public(&logger()),
        Err(IdentityKeyError::IoFailure(_))
    ));
    assert!(!files.private_path().exists());
    assert!(!files.public_path().exists());
}

#[test]
fn change_password_reencrypts_the_private_block() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let mut rng = StdRng::seed_from_u64(7);
    let key = generate(KeyAlgorithm::Ecdsa, &mut rng);
    files.save(&logger(), &key, "old", KDF, &mut rng, false).unwrap();
    let record = std::fs::read(files.public_path()).unwrap();

    files
        .change_password(&logger(), "old", "new", KDF, &mut rng)
        .unwrap();

    assert!(files.load(&logger(), "old").is_err());
    assert_eq!(files.load(&logger(), "new").unwrap(), key);
    assert_eq!(std::fs::read(files.public_path()).unwrap(), record);
}

#[test]
fn private_block_loads_without_public_record() {
    let dir = tempfile::tempdir().unwrap();
    let files = IdentityKeyFiles::new(dir.path().join("id"));
    let mut rng = StdRng::seed_from_u64(8);
    let key = generate(KeyAlgorithm::Ed25519, &mut rng);
    files.save(&logger(), &key, "pw", KDF, &mut rng, false).unwrap();
    std::fs::remove_file(files.public_path()).unwrap();

    assert_eq!(files.load_private(&logger(), "pw").unwrap(), key);
    assert!(files.load(&logger(), "pw").is_err());
}

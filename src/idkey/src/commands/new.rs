use crate::lib::environment::Environment;
use crate::lib::error::IdkeyResult;
use crate::lib::password::{PasswordOpts, PromptMode};
use anyhow::Context;
use clap::Parser;
use idkey_core::{IdentityKey, IdentityKeyFiles, KeyAlgorithm};
use rand::rngs::OsRng;
use slog::info;
use std::path::PathBuf;

/// Generates a new identity key. The encrypted private key is written to PREFIX and the
/// public key record to PREFIX.pub.
#[derive(Parser)]
pub struct NewOpts {
    /// Path prefix of the key files.
    prefix: PathBuf,

    /// The key algorithm: rsa, ecdsa or ed25519. Defaults to ed25519.
    #[arg(long)]
    algorithm: Option<KeyAlgorithm>,

    /// RSA modulus size in bits.
    #[arg(long)]
    rsa_bits: Option<usize>,

    /// JSON file with key generation settings. Command line options take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// If the key files already exist, replace them.
    #[arg(long)]
    force: bool,

    #[command(flatten)]
    password: PasswordOpts,
}

pub fn exec(env: &dyn Environment, opts: NewOpts) -> IdkeyResult {
    let log = env.get_logger();

    let mut config = super::load_config(opts.config.as_deref())?;
    if let Some(algorithm) = opts.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(rsa_bits) = opts.rsa_bits {
        config.rsa_bits = rsa_bits;
    }

    let files = IdentityKeyFiles::new(&opts.prefix);
    if !opts.force {
        files
            .ensure_absent()
            .context("Pass --force to replace the existing key files.")?;
    }
    let password = opts.password.read(PromptMode::EncryptingToCreate)?;
    let key = IdentityKey::from_config(log, &config, &mut OsRng)?;
    files
        .save(log, &key, &password, config.kdf, &mut OsRng, opts.force)
        .with_context(|| format!("Failed to save identity key to {}.", opts.prefix.display()))?;

    info!(
        log,
        r#"Created {} identity key "{}"."#,
        key.algorithm(),
        files.private_path().display()
    );
    if env.get_verbose_level() >= 0 {
        println!("{}", key.public_record()?);
    }
    Ok(())
}

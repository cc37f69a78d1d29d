use crate::lib::environment::Environment;
use crate::lib::error::IdkeyResult;
use crate::lib::password::{PasswordOpts, PromptMode};
use anyhow::Context;
use clap::Parser;
use idkey_core::IdentityKeyFiles;
use slog::info;
use std::path::PathBuf;

/// Decrypts an identity key and checks that its public key record matches.
#[derive(Parser)]
pub struct VerifyOpts {
    /// Path prefix of the key files.
    prefix: PathBuf,

    #[command(flatten)]
    password: PasswordOpts,
}

pub fn exec(env: &dyn Environment, opts: VerifyOpts) -> IdkeyResult {
    let log = env.get_logger();
    let files = IdentityKeyFiles::new(&opts.prefix);
    let password = opts.password.read(PromptMode::DecryptingToUse)?;

    let key = files
        .load(log, &password)
        .with_context(|| format!("Failed to verify {}.", opts.prefix.display()))?;
    info!(
        log,
        "{} and {} hold a matching {} identity key.",
        files.private_path().display(),
        files.public_path().display(),
        key.algorithm()
    );
    Ok(())
}

use crate::lib::environment::Environment;
use crate::lib::error::IdkeyResult;
use crate::lib::password::{password_prompt, read_password_file, PasswordOpts, PromptMode};
use anyhow::Context;
use clap::Parser;
use idkey_core::IdentityKeyFiles;
use rand::rngs::OsRng;
use std::path::PathBuf;

/// Re-encrypts the private key of an identity under a new passphrase.
#[derive(Parser)]
pub struct ChangePasswordOpts {
    /// Path prefix of the key files.
    prefix: PathBuf,

    /// Read the new passphrase from the first line of this file instead of prompting for it.
    #[arg(long, value_name = "PATH")]
    new_password_file: Option<PathBuf>,

    /// JSON file whose key derivation settings are applied to the new passphrase.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    password: PasswordOpts,
}

pub fn exec(env: &dyn Environment, opts: ChangePasswordOpts) -> IdkeyResult {
    let log = env.get_logger();
    let config = super::load_config(opts.config.as_deref())?;
    let files = IdentityKeyFiles::new(&opts.prefix);

    let old_password = opts.password.read(PromptMode::DecryptingToUse)?;
    let new_password = match &opts.new_password_file {
        Some(path) => read_password_file(path)?,
        None => password_prompt(PromptMode::EncryptingToCreate)?,
    };

    files
        .change_password(log, &old_password, &new_password, config.kdf, &mut OsRng)
        .with_context(|| format!("Failed to change the passphrase of {}.", opts.prefix.display()))
}

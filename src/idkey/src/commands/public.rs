use crate::lib::environment::Environment;
use crate::lib::error::IdkeyResult;
use crate::lib::password::{PasswordOpts, PromptMode};
use anyhow::Context;
use clap::Parser;
use idkey_core::IdentityKeyFiles;
use std::path::PathBuf;

/// Prints the public key record of an identity key.
#[derive(Parser)]
pub struct PublicOpts {
    /// Path prefix of the key files.
    prefix: PathBuf,

    /// Derive the record from the private key at PREFIX instead of reading PREFIX.pub.
    #[arg(long)]
    derive: bool,

    #[command(flatten)]
    password: PasswordOpts,
}

pub fn exec(env: &dyn Environment, opts: PublicOpts) -> IdkeyResult {
    let log = env.get_logger();
    let files = IdentityKeyFiles::new(&opts.prefix);

    let public_key = if opts.derive {
        let password = opts.password.read(PromptMode::DecryptingToUse)?;
        files
            .load_private(log, &password)
            .with_context(|| {
                format!("Failed to load private key {}.", files.private_path().display())
            })?
            .public_half()
    } else {
        files.load_public(log).with_context(|| {
            format!("Failed to load public key {}.", files.public_path().display())
        })?
    };
    println!("{}", public_key.to_record()?);
    Ok(())
}

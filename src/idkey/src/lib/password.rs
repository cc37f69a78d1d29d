use crate::lib::error::IdkeyResult;
use anyhow::{bail, Context};
use clap::Args;
use std::path::{Path, PathBuf};

/// Consulted when no passphrase file is given.
pub const PASSWORD_ENV_VAR: &str = "IDKEY_PASSWORD";

#[derive(Args, Clone, Debug, Default)]
pub struct PasswordOpts {
    /// Read the passphrase from the first line of this file instead of prompting for it.
    /// The IDKEY_PASSWORD environment variable is used when this is not set.
    #[arg(long, value_name = "PATH")]
    pub password_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptMode {
    EncryptingToCreate,
    DecryptingToUse,
}

impl PasswordOpts {
    pub fn read(&self, mode: PromptMode) -> IdkeyResult<String> {
        if let Some(path) = &self.password_file {
            return read_password_file(path);
        }
        if let Ok(password) = std::env::var(PASSWORD_ENV_VAR) {
            return Ok(password);
        }
        password_prompt(mode)
    }
}

pub fn read_password_file(path: &Path) -> IdkeyResult<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read passphrase from {}.", path.display()))?;
    let password = content.lines().next().unwrap_or_default();
    if password.is_empty() {
        bail!("Passphrase file {} is empty.", path.display());
    }
    Ok(password.to_string())
}

pub fn password_prompt(mode: PromptMode) -> IdkeyResult<String> {
    let input = dialoguer::Password::new();
    let input = match mode {
        PromptMode::EncryptingToCreate => input
            .with_prompt("Please enter a passphrase for your identity key")
            .with_confirmation("Repeat the passphrase", "Passphrases do not match."),
        PromptMode::DecryptingToUse => {
            input.with_prompt("Please enter the passphrase for your identity key")
        }
    };
    input.interact().context("Failed to read passphrase.")
}

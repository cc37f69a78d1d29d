use crate::lib::environment::Environment;
use crate::lib::error::IdkeyResult;
use anyhow::Context;
use clap::Subcommand;
use idkey_core::config::KeyGenConfiguration;
use std::path::Path;

mod change_password;
mod new;
mod public;
mod verify;

#[derive(Subcommand)]
pub enum IdkeyCommand {
    ChangePassword(change_password::ChangePasswordOpts),
    New(new::NewOpts),
    Public(public::PublicOpts),
    Verify(verify::VerifyOpts),
}

pub fn exec(env: &dyn Environment, cmd: IdkeyCommand) -> IdkeyResult {
    match cmd {
        IdkeyCommand::ChangePassword(v) => change_password::exec(env, v),
        IdkeyCommand::New(v) => new::exec(env, v),
        IdkeyCommand::Public(v) => public::exec(env, v),
        IdkeyCommand::Verify(v) => verify::exec(env, v),
    }
}

/// Loads key generation settings from `path`, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> IdkeyResult<KeyGenConfiguration> {
    match path {
        Some(path) => KeyGenConfiguration::load(path)
            .with_context(|| format!("Failed to load configuration from {}.", path.display())),
        None => Ok(KeyGenConfiguration::default()),
    }
}

#![allow(special_module_name)]
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::IdkeyResult;
use crate::lib::logger::create_root_logger;
use anyhow::Error;
use clap::{ArgAction, Parser};

mod commands;
mod lib;

/// Creates and inspects algorithm-tagged identity key files.
#[derive(Parser)]
#[command(name = "idkey", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv will generate a very large number of messages.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: commands::IdkeyCommand,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> (i64, slog::Logger) {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;
    (verbose_level, create_root_logger(verbose_level))
}

fn print_error(err: Error) {
    for (level, cause) in err.chain().enumerate() {
        let prefix = if level == 0 { "Error" } else { "Caused by" };
        eprintln!("{prefix}: {cause}");
    }
}

fn inner_main() -> IdkeyResult {
    let cli_opts = CliOpts::parse();
    let (verbose_level, log) = setup_logging(&cli_opts);

    let env = EnvironmentImpl::new(log).with_verbose_level(verbose_level);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    commands::exec(&env, cli_opts.command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        print_error(err);
        std::process::exit(255);
    }
}

#[cfg(test)]
mod tests {
    use crate::CliOpts;
    use clap::{CommandFactory, Parser};

    #[test]
    fn validate_cli() {
        CliOpts::command().debug_assert();
    }

    #[test]
    fn parses_new_with_algorithm() {
        let args = ["idkey", "-v", "new", "keys/id", "--algorithm", "rsa"];
        let opts = CliOpts::try_parse_from(args).unwrap();
        assert_eq!(opts.verbose, 1);
        assert!(matches!(opts.command, crate::commands::IdkeyCommand::New(_)));

        let args = ["idkey", "new", "keys/id", "--algorithm", "dsa"];
        assert!(CliOpts::try_parse_from(args).is_err());
    }
}

//! CLI layer — user-facing command-line interface.
//!
//! - `args`: CLI argument definitions using clap
//! - `commands`: one module per subcommand
//! - `exit_status`: two-valued exit status
//! - `log`: structured stderr logger
//! - `run`: command dispatcher

use std::process::ExitCode;

use clap::error::ErrorKind;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub mod args;
mod commands;
mod exit_status;
pub mod log;
mod run;

/// Run the CLI to completion and return the process exit code. Never
/// returns `Err`: failures are reported to stderr (or stdout, under
/// `--json`) and folded into the `Failure` exit status instead.
pub fn run_cli(args: Arguments) -> ExitCode {
    match run::run(args) {
        Ok(status) => status.into(),
        Err(_) => ExitStatus::Failure.into(),
    }
}

/// Parse `raw_args` (including argv[0]) into `Arguments`, or a plain exit
/// code the caller should terminate with instead.
///
/// clap's own default for an unrecognized subcommand is exit code 2; this
/// CLI's surface is two-valued (0/1), so an unknown subcommand is folded
/// into `Failure` (1) like every other command error. When the offending
/// argument looks like a path (`.` or `/` prefix — the common mistake of
/// passing a project root without the `scan` subcommand), a one-line hint
/// is printed instead of clap's generic usage dump.
pub fn parse_or_exit_code(raw_args: impl IntoIterator<Item = String>) -> Result<Arguments, u8> {
    use clap::Parser as _;

    let raw_args: Vec<String> = raw_args.into_iter().collect();
    match Arguments::try_parse_from(&raw_args) {
        Ok(args) => Ok(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            Err(0)
        }
        Err(err) => {
            if matches!(err.kind(), ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument) {
                if let Some(first) = raw_args.get(1) {
                    if first.starts_with('.') || first.starts_with('/') {
                        eprintln!(
                            "[UIC] [ERROR] unknown subcommand \"{first}\" — did you mean `uic scan {first}`?"
                        );
                        return Err(1);
                    }
                }
            }
            eprint!("{err}");
            Err(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cli: &[&str]) -> Vec<String> {
        std::iter::once("uic".to_string()).chain(cli.iter().map(|s| s.to_string())).collect()
    }

    #[test]
    fn path_like_unknown_subcommand_gets_a_hint_and_exits_one() {
        let result = parse_or_exit_code(args(&["./my-app"]));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn unrelated_unknown_subcommand_still_exits_one() {
        let result = parse_or_exit_code(args(&["bogus"]));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn help_flag_exits_zero() {
        let result = parse_or_exit_code(args(&["--help"]));
        assert_eq!(result.unwrap_err(), 0);
    }

    #[test]
    fn valid_subcommand_parses() {
        let result = parse_or_exit_code(args(&["scan", "."]));
        assert!(result.is_ok());
    }
}

//! Command dispatcher: maps the parsed `Command` to its implementation.

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{annotate, describe, diff, find, list, name, scan};
use super::exit_status::ExitStatus;
use super::log::{self, Level};

/// Whether `--json` was requested for this invocation. `name` carries no
/// `--json` flag per spec §6's CLI table.
fn wants_json(command: &Command) -> bool {
    match command {
        Command::Scan(cmd) => cmd.json,
        Command::Name(_) => false,
        Command::Annotate(cmd) => cmd.json,
        Command::Diff(cmd) => cmd.json,
        Command::List(cmd) => cmd.json,
        Command::Find(cmd) => cmd.json,
        Command::Describe(cmd) => cmd.json,
    }
}

pub fn run(args: Arguments) -> Result<ExitStatus> {
    if args.quiet {
        log::set_level(Level::Error);
    } else if args.verbose {
        log::set_level(Level::Debug);
    }

    let json = wants_json(&args.command);

    let result = match args.command {
        Command::Scan(cmd) => scan::run(cmd),
        Command::Name(cmd) => name::run(cmd),
        Command::Annotate(cmd) => annotate::run(cmd),
        Command::Diff(cmd) => diff::run(cmd),
        Command::List(cmd) => list::run(cmd),
        Command::Find(cmd) => find::run(cmd),
        Command::Describe(cmd) => describe::run(cmd),
    };

    result.inspect_err(|err| report_error(err, json))
}

/// Structured `--json` error output serializes `{code, message, context}` to
/// stdout and still exits non-zero; otherwise the logger prints to stderr.
fn report_error(err: &anyhow::Error, json: bool) {
    if json {
        if let Some(uic_err) = err.downcast_ref::<crate::error::UicError>() {
            if let Ok(rendered) = serde_json::to_string_pretty(&uic_err.to_json()) {
                println!("{rendered}");
                return;
            }
        }
    }
    log::error_with(&err.to_string(), &std::collections::BTreeMap::new());
}

//! `uic` CLI entry point.

use std::process::ExitCode;

use uic::cli::{parse_or_exit_code, run_cli};

fn main() -> ExitCode {
    match parse_or_exit_code(std::env::args()) {
        Ok(args) => run_cli(args),
        Err(code) => ExitCode::from(code),
    }
}

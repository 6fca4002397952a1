//! pipconvert: convert a Pipfile into a pyproject.toml for uv.
//!
//! The library half ([`pipfile`], [`convert`]) is a pure function of its
//! inputs: parse the Pipfile, map it onto a `pyproject.toml`, serialize, and
//! collapse `[tool.uv.sources]` into inline tables. The binary half ([`cli`],
//! [`commands`]) gathers the project metadata and guards against overwriting
//! an existing file.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod convert;
pub mod error;
pub mod logging;
pub mod pipfile;
pub mod printer;

pub use convert::{ProjectIdentity, PyProject, convert_pipfile_to_pyproject};
pub use error::ConvertError;
pub use pipfile::Pipfile;

/// Entry point for the pipconvert CLI.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::setup_logging(cli.verbose, cli.quiet);
    let printer = Printer::new(cli.quiet);

    match commands::dispatch(&cli, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            // An anyhow::Error always has at least one cause (itself).
            printer.error(
                &causes
                    .next()
                    .expect("error chain is never empty")
                    .to_string(),
            );
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}

//! Command dispatch for pipconvert.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::Cli;
use crate::printer::Printer;

pub mod convert;
mod prompt;

/// Exit status for pipconvert.
#[derive(Copy, Clone)]
pub enum ExitStatus {
    /// The command succeeded, or the user cancelled it.
    Success,

    /// The command failed due to an error in the user input.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Run the command described by the parsed CLI.
pub fn dispatch(cli: &Cli, printer: Printer) -> Result<ExitStatus> {
    convert::execute(&cli.convert, printer)
}

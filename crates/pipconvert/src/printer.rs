//! Output formatting for pipconvert.
//!
//! The [`Printer`] controls whether messages are emitted to stderr based on
//! the user's `--quiet` flag. Errors are always printed regardless of quiet
//! mode.

use anstream::eprintln;
use owo_colors::OwoColorize;

/// Controls output formatting for pipconvert.
#[derive(Copy, Clone)]
pub struct Printer {
    /// Whether output is suppressed.
    quiet: bool,
}

impl Printer {
    /// Create a new printer with the given quiet setting.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print an informational message to stderr.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print an error message to stderr, even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }
}

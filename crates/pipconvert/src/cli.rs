//! CLI argument definitions for pipconvert.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser};

/// Clap v3-style help menu colors, matching uv's convention.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Convert a Pipfile into a pyproject.toml for uv.
#[derive(Parser, Debug)]
#[command(
    name = "pipconvert",
    author,
    version,
    about = "Convert a Pipfile into a pyproject.toml for uv.",
    styles = STYLES,
    after_help = "Values not given on the command line are prompted for when running in a terminal."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the conversion itself.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the Pipfile to convert.
    #[arg(short, long, default_value = "Pipfile")]
    pub pipfile: PathBuf,

    /// Where to write the generated pyproject.toml.
    #[arg(short, long, default_value = "pyproject.toml")]
    pub output: PathBuf,

    /// The project name [default: project-name].
    #[arg(long)]
    pub name: Option<String>,

    /// The project version [default: 0.0.0].
    #[arg(long)]
    pub project_version: Option<String>,

    /// The project description [default: Project description].
    #[arg(long)]
    pub description: Option<String>,

    /// The exact Python version to require [default: the Pipfile's
    /// `python_full_version`, or 3.10.15].
    #[arg(long)]
    pub python_version: Option<String>,

    /// Overwrite an existing output file without asking.
    #[arg(short, long)]
    pub yes: bool,

    /// Never prompt; use defaults for values not given on the command line.
    #[arg(long)]
    pub no_input: bool,
}

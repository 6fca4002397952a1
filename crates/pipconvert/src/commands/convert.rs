//! The conversion command: turn a Pipfile into a pyproject.toml.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::ConvertArgs;
use crate::commands::ExitStatus;
use crate::commands::prompt;
use crate::convert::{
    DEFAULT_PROJECT_DESCRIPTION, DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_VERSION,
    DEFAULT_PYTHON_VERSION, ProjectIdentity, write_pyproject,
};
use crate::pipfile::Pipfile;
use crate::printer::Printer;

/// Execute the conversion.
pub fn execute(args: &ConvertArgs, printer: Printer) -> Result<ExitStatus> {
    let interactive = !args.no_input && std::io::stdin().is_terminal();
    debug!("Interactive prompts enabled: {interactive}");

    let pipfile = Pipfile::from_path(&args.pipfile)?;

    if args.output.exists() && !args.yes {
        if !interactive {
            printer.error(&format!(
                "`{}` already exists. Pass `--yes` to overwrite it.",
                args.output.display()
            ));
            return Ok(ExitStatus::Failure);
        }
        if !prompt::confirm_overwrite(&args.output)? {
            printer.info("Operation cancelled.");
            return Ok(ExitStatus::Success);
        }
    }

    let identity = resolve_identity(args, &pipfile, interactive)?;
    write_pyproject(&pipfile, &identity, &args.output)
        .with_context(|| format!("Failed to convert `{}`", args.pipfile.display()))?;

    printer.info(&format!(
        "pyproject.toml generated at {}",
        args.output.display()
    ));
    Ok(ExitStatus::Success)
}

/// Fill in the project identity from flags, prompts, and defaults, in that order.
fn resolve_identity(
    args: &ConvertArgs,
    pipfile: &Pipfile,
    interactive: bool,
) -> Result<ProjectIdentity> {
    let value = |given: Option<&str>, prompt: &str, default: &str| -> Result<String> {
        match given {
            Some(value) => Ok(value.to_owned()),
            None if interactive => prompt::input_with_default(prompt, default),
            None => Ok(default.to_owned()),
        }
    };

    let default_python = pipfile
        .python_full_version()
        .unwrap_or(DEFAULT_PYTHON_VERSION);

    Ok(ProjectIdentity {
        name: value(
            args.name.as_deref(),
            "Enter the project name",
            DEFAULT_PROJECT_NAME,
        )?,
        version: value(
            args.project_version.as_deref(),
            "Enter the project version",
            DEFAULT_PROJECT_VERSION,
        )?,
        description: value(
            args.description.as_deref(),
            "Enter the project description",
            DEFAULT_PROJECT_DESCRIPTION,
        )?,
        python_version: value(
            args.python_version.as_deref(),
            "Enter the required Python version",
            default_python,
        )?,
    })
}

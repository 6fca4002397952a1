//! Interactive prompts using dialoguer.

use std::path::Path;

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Ask for a value, falling back to `default` on empty input.
pub(crate) fn input_with_default(prompt: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_owned())
        .interact_text()?;
    Ok(value.trim().to_owned())
}

/// Ask whether an existing file may be overwritten. Defaults to no.
pub(crate) fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "`{}` already exists and will be overwritten. Do you want to proceed?",
            path.display()
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

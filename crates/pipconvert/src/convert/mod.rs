//! Conversion of a [`Pipfile`] into a `pyproject.toml`.
//!
//! ## Architecture
//!
//! Conversion runs in two passes:
//!
//! 1. [`PyProject::from_pipfile`] maps the Pipfile onto an in-memory
//!    `pyproject.toml`, which `toml` serializes into a draft.
//! 2. [`rewrite::collapse_source_tables`] rewrites the draft so that index pins
//!    appear as inline entries under a single `[tool.uv.sources]` header.
//!
//! The draft never touches disk; the final text is written atomically.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::pipfile::Pipfile;

pub mod mapper;
pub mod requirement;
pub mod rewrite;

pub use mapper::{Index, IndexSource, Project, PyProject, Tool, ToolUv};
pub use requirement::format_requirement;
pub use rewrite::collapse_source_tables;

pub const DEFAULT_PROJECT_NAME: &str = "project-name";
pub const DEFAULT_PROJECT_VERSION: &str = "0.0.0";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Project description";
pub const DEFAULT_PYTHON_VERSION: &str = "3.10.15";

/// The `[project]` metadata that a Pipfile doesn't carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Rendered as `requires-python = "==<python_version>"`.
    pub python_version: String,
}

impl Default for ProjectIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_owned(),
            version: DEFAULT_PROJECT_VERSION.to_owned(),
            description: DEFAULT_PROJECT_DESCRIPTION.to_owned(),
            python_version: DEFAULT_PYTHON_VERSION.to_owned(),
        }
    }
}

/// Serialize a [`PyProject`] into its final `pyproject.toml` text.
pub fn render_pyproject(pyproject: &PyProject) -> Result<String, ConvertError> {
    let draft = toml::to_string(pyproject)?;
    trace!("Draft pyproject.toml:\n{draft}");
    collapse_source_tables(&draft)
}

/// Convert `pipfile` and write the result to `output`, replacing any existing file.
pub fn write_pyproject(
    pipfile: &Pipfile,
    identity: &ProjectIdentity,
    output: &Path,
) -> Result<(), ConvertError> {
    let pyproject = PyProject::from_pipfile(pipfile, identity)?;
    let rendered = render_pyproject(&pyproject)?;
    write_atomic(output, rendered.as_bytes())?;
    debug!("Wrote {} bytes to `{}`", rendered.len(), output.display());
    Ok(())
}

/// Read the Pipfile at `pipfile_path` and write the converted manifest to `output`.
pub fn convert_pipfile_to_pyproject(
    pipfile_path: &Path,
    output: &Path,
    identity: &ProjectIdentity,
) -> Result<(), ConvertError> {
    let pipfile = Pipfile::from_path(pipfile_path)?;
    write_pyproject(&pipfile, identity, output)
}

/// Write `contents` to a temporary file next to `path`, then move it into place.
///
/// A replaced file keeps its permissions.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;

    // Temporary files are created owner-only.
    let permissions = match fs_err::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => new_file_permissions(),
        Err(err) => return Err(err),
    };
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }

    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

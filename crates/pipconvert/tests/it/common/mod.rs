// The `unreachable_pub` is to silence false positives in RustRover.
#![allow(dead_code, unreachable_pub)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns the pipconvert binary that cargo built before launching the tests.
pub fn get_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pipconvert"))
}

/// Create a `pipconvert` command for testing.
pub fn pipconvert_command() -> Command {
    let mut command = Command::new(get_bin());
    // Keep log output out of stderr assertions.
    command.env_remove("RUST_LOG");
    command
}

/// Return the path to a test fixture Pipfile.
pub fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path.push("Pipfile");
    path
}

/// Copy a fixture Pipfile into a fresh temporary project directory.
pub fn project_with_fixture(name: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs_err::copy(fixture(name), dir.path().join("Pipfile")).expect("Failed to copy fixture");
    dir
}

/// Read and parse a generated `pyproject.toml`.
pub fn read_pyproject(path: &Path) -> toml::Table {
    let content = fs_err::read_to_string(path).expect("Failed to read pyproject.toml");
    content.parse().expect("Generated pyproject.toml is not valid TOML")
}

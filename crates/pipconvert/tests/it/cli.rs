//! Integration tests for the `pipconvert` binary.

use crate::common::{pipconvert_command, project_with_fixture, read_pyproject};

#[test]
fn converts_with_defaults_when_not_interactive() {
    let dir = project_with_fixture("with-dev-deps");

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.arg("--no-input");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(
        stderr.contains("pyproject.toml generated at pyproject.toml"),
        "Expected a success message, got: {stderr}"
    );

    let document = read_pyproject(&dir.path().join("pyproject.toml"));
    assert_eq!(document["project"]["name"].as_str(), Some("project-name"));
    assert_eq!(document["project"]["version"].as_str(), Some("0.0.0"));
    // The Pipfile's python_full_version is the default.
    assert_eq!(
        document["project"]["requires-python"].as_str(),
        Some("==3.12.4")
    );
}

#[test]
fn flags_set_project_metadata() {
    let dir = project_with_fixture("multiple-sources");

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.args([
        "--name",
        "billing",
        "--project-version",
        "1.2.3",
        "--description",
        "Billing service",
        "--python-version",
        "3.11.9",
        "--output",
        "out.toml",
    ]);

    let output = cmd.output().expect("Failed to execute pipconvert");
    assert!(output.status.success());

    let document = read_pyproject(&dir.path().join("out.toml"));
    assert_eq!(document["project"]["name"].as_str(), Some("billing"));
    assert_eq!(document["project"]["version"].as_str(), Some("1.2.3"));
    assert_eq!(
        document["project"]["description"].as_str(),
        Some("Billing service")
    );
    assert_eq!(
        document["project"]["requires-python"].as_str(),
        Some("==3.11.9")
    );
    assert_eq!(
        document["tool"]["uv"]["sources"]["internal-lib"]["index"].as_str(),
        Some("my_private")
    );
}

#[test]
fn missing_pipfile_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.arg("--no-input");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("No Pipfile found"), "stderr: {stderr}");
    assert!(!dir.path().join("pyproject.toml").exists());
}

#[test]
fn refuses_to_overwrite_without_yes() {
    let dir = project_with_fixture("minimal");
    let existing = dir.path().join("pyproject.toml");
    fs_err::write(&existing, "[project]\nname = \"keep-me\"\n").unwrap();

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.arg("--no-input");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("--yes"), "stderr: {stderr}");
    assert_eq!(
        fs_err::read_to_string(&existing).unwrap(),
        "[project]\nname = \"keep-me\"\n"
    );
}

#[test]
fn overwrites_with_yes() {
    let dir = project_with_fixture("minimal");
    let existing = dir.path().join("pyproject.toml");
    fs_err::write(&existing, "[project]\nname = \"keep-me\"\n").unwrap();

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.args(["--no-input", "--yes"]);

    let output = cmd.output().expect("Failed to execute pipconvert");
    assert!(output.status.success());

    let document = read_pyproject(&existing);
    assert_eq!(document["project"]["name"].as_str(), Some("project-name"));
}

#[test]
fn malformed_pipfile_reports_the_package() {
    let dir = project_with_fixture("malformed-spec");

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.arg("--no-input");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("numpy"), "stderr: {stderr}");
}

#[test]
fn quiet_suppresses_success_message() {
    let dir = project_with_fixture("minimal");

    let mut cmd = pipconvert_command();
    cmd.current_dir(dir.path());
    cmd.args(["--no-input", "--quiet"]);

    let output = cmd.output().expect("Failed to execute pipconvert");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(dir.path().join("pyproject.toml").is_file());
}

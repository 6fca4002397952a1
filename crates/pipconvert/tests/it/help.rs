use crate::common::pipconvert_command;

#[test]
fn help_lists_every_option() {
    let mut cmd = pipconvert_command();
    cmd.arg("--help");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Convert a Pipfile into a pyproject.toml for uv."));
    for flag in [
        "--pipfile",
        "--output",
        "--name",
        "--project-version",
        "--description",
        "--python-version",
        "--yes",
        "--no-input",
        "--verbose",
        "--quiet",
    ] {
        assert!(stdout.contains(flag), "Missing {flag} in help: {stdout}");
    }
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let mut cmd = pipconvert_command();
    cmd.arg("--frobnicate");

    let output = cmd.output().expect("Failed to execute pipconvert");

    assert_eq!(output.status.code(), Some(2));
}

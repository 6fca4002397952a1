use crate::common::pipconvert_command;

#[test]
fn version_flag_shows_version() {
    let mut cmd = pipconvert_command();
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("pipconvert "),
        "Expected version string starting with 'pipconvert ', got: {stdout}"
    );
}

#[test]
fn short_version_flag_works() {
    let mut cmd = pipconvert_command();
    cmd.arg("-V");

    let output = cmd.output().expect("Failed to execute pipconvert");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("pipconvert "));
}

use std::process::ExitCode;

use pipconvert::main as pipconvert_main;

fn main() -> ExitCode {
    pipconvert_main(std::env::args_os())
}

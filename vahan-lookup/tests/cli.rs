//! Command-line behaviour that does not reach the network.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vahan-lookup"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run vahan-lookup")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: vahan-lookup"));
    assert!(stdout(&output).contains("Example: vahan-lookup KL07CN3645"));
}

#[test]
fn extra_arguments_print_usage() {
    let output = run(&["KL07CN3645", "MH01AB1234"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: vahan-lookup"));
}

#[test]
fn unknown_flag_prints_usage() {
    let output = run(&["--verbose", "KL07CN3645"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: vahan-lookup"));
}

#[test]
fn invalid_format_aborts_before_lookup() {
    for input in ["kl07cn3645", "K07CN3645", "KL7CN3645", "KL 07 CN 3645"] {
        let output = run(&[input]);
        assert_eq!(output.status.code(), Some(2), "input {input:?}");

        // Nothing is printed on stdout: no banner, no report
        assert!(stdout(&output).is_empty(), "input {input:?}");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("invalid registration number format"),
            "input {input:?}: {stderr}"
        );
    }
}

#[test]
fn help_exits_successfully() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("REGISTRATION"));
}

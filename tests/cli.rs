use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shell(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tiny_shell"))
        .arg("--plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tiny_shell");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write input");
    child.wait_with_output().expect("failed to wait for tiny_shell")
}

#[test]
#[cfg(unix)]
fn test_logout_after_failing_command_exits_zero() {
    let output = run_shell("false\nalias only\nlogout\nhelp\n");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("> "), "stdout was {stdout:?}");
    assert!(!stdout.contains("The following are built-in commands:"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("alias: expected exactly two arguments"));
}

#[test]
fn test_end_of_input_exits_zero() {
    let output = run_shell("history\n");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "> 1 history\n> ");
}

#[test]
fn test_empty_input_exits_zero() {
    let output = run_shell("");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> ");
}

//! Drives the built binary end-to-end against a temporary input file.

use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_simplecross"))
}

#[test]
fn reads_file_and_prints_results_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "O 1 IBM B 10 100.00000").unwrap();
    writeln!(file, "O 2 IBM S 10 100.00000").unwrap();
    writeln!(file, "P").unwrap();

    let output = bin()
        .arg("--input")
        .arg(file.path())
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["F 2 IBM 10 100.00000", "F 1 IBM 10 100.00000"]);
}

#[test]
fn reads_from_stdin_when_input_is_a_dash() {
    let mut child = bin()
        .arg("--input")
        .arg("-")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("binary should spawn");

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, "O 1 IBM B 10 100.00000").unwrap();
        writeln!(stdin, "X 99999").unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["E 99999 Order ID not on book"]
    );
}

#[test]
fn missing_input_file_exits_nonzero() {
    let output = bin()
        .arg("--input")
        .arg("/nonexistent/path/does-not-exist.txt")
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}

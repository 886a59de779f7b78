//! End-to-end tests for the `oxide-validate` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::NamedTempFile;

fn oxide_validate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oxide-validate"));
    cmd.env_remove("OXIDE_VALIDATE_PRETTY")
        .env_remove("OXIDE_VALIDATE_VERBOSE");
    cmd
}

fn reports(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn valid_inline_statement_exits_zero() {
    let output = oxide_validate()
        .arg("SELECT COUNT(id) AS total FROM products;")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let reports = reports(&output);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[0]["statement_type"], "SELECT");
}

#[test]
fn invalid_statement_exits_one() {
    let output = oxide_validate()
        .args(["UPDATE users SET name = 'Bob'", "DELETE users WHERE id = 5;"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let reports = reports(&output);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[1]["valid"], false);
    assert_eq!(reports[1]["position"], 7);
    assert_eq!(reports[1]["stage"], "SYNTACTIC");
}

#[test]
fn file_in_line_mode() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "SELECT * FROM users").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "INSERT INTO users VALUES (10);").unwrap();

    let output = oxide_validate()
        .arg("--lines")
        .arg("--file")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let reports = reports(&output);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["expected"], "'(' before column list");
}

#[test]
fn reads_stdin_by_default() {
    let mut child = oxide_validate()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"DELETE FROM sessions\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(reports(&output)[0]["statement_type"], "DELETE");
}

#[test]
fn missing_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = oxide_validate()
        .arg("--file")
        .arg(dir.path().join("nope.sql"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.sql"));
}

#[test]
fn unknown_flag_exits_two() {
    let output = oxide_validate().arg("--no-such-flag").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

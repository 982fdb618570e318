use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_lagrange_reconstruct");

fn run_on(document: &str, extra: &[&str]) -> Output {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(document.as_bytes()).unwrap();
    Command::new(BIN)
        .arg(file.path())
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const LINE: &str = r#"{
    "keys": { "n": 2, "k": 2 },
    "1": { "base": "10", "value": "10" },
    "2": { "base": "10", "value": "13" }
}"#;

#[test]
fn prints_pretty_result() {
    let out = run_on(LINE, &[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "{\n  \"constant\": \"7\"\n}\n"
    );
}

#[test]
fn compact_flag() {
    let out = run_on(LINE, &["--compact"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "{\"constant\":\"7\"}\n");
}

#[test]
fn reads_stdin() {
    let mut child = Command::new(BIN)
        .arg("-")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(LINE.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("\"7\""));
}

#[test]
fn bad_digit_fails_with_message() {
    let doc = r#"{
        "keys": { "k": 1 },
        "1": { "base": "2", "value": "102" }
    }"#;
    let out = run_on(doc, &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("out of range for base 2"), "stderr: {err}");
}

#[test]
fn missing_threshold_fails() {
    let out = run_on(r#"{ "1": { "base": "10", "value": "1" } }"#, &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("missing field `keys`"));
}

#[test]
fn missing_file_fails() {
    let out = Command::new(BIN)
        .arg("/definitely/not/here.json")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("could not open"));
}

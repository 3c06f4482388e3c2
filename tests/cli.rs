//! Command-line smoke tests for the gitk-syntax binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_source(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn tokenizes_a_javascript_file() {
    let file = write_source(".js", "const x = 1;\n");

    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"type":"keyword","value":"const"}"#));
}

#[test]
fn unknown_extension_emits_plain_text() {
    let file = write_source(".xyz", "anything\n");

    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"type":"text","value":"anything"}"#));
}

#[test]
fn language_flag_overrides_detection() {
    let file = write_source(".xyz", "fn main() {}\n");

    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .args(["--language", "rust"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"type":"keyword","value":"fn"}"#));
}

#[test]
fn colors_flag_annotates_tokens() {
    let file = write_source(".js", "let y = 2;\n");

    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .arg("--colors")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("var(--syntax-keyword)"));
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .arg("/no/such/file.rs")
        .assert()
        .failure();
}

#[test]
fn bad_language_name_fails() {
    let file = write_source(".js", "x\n");

    Command::cargo_bin("gitk-syntax")
        .unwrap()
        .args(["--language", "not-a-real-language"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

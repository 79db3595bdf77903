//! End-to-end tests for the `lox` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn lox() -> Command {
    let mut cmd = Command::cargo_bin("lox").expect("binary built");
    cmd.env_remove("LOX_LOG")
        .env_remove("LOX_VERBOSE")
        .env("LOX_NO_COLOR", "true");
    cmd
}

#[test]
fn tokenize_clean_file() {
    let file = source_file("()");
    lox()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .code(0)
        .stdout("LEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n")
        .stderr("");
}

#[test]
fn tokenize_empty_file() {
    let file = source_file("");
    lox()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .success()
        .stdout("EOF  null\n");
}

#[test]
fn tokenize_reports_lexical_errors() {
    let file = source_file("(#)");
    lox()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .code(65)
        .stdout("LEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n")
        .stderr("[line 1] Error: Unexpected character: #\n");
}

#[test]
fn tokenize_unterminated_string() {
    let file = source_file("\"unterminated");
    lox()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .code(65)
        .stdout("EOF  null\n")
        .stderr("[line 1] Error: Unterminated string.\n");
}

#[test]
fn tokenize_literals() {
    let file = source_file("var x = \"hi\" + 123.;\n");
    lox()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "VAR var null\n\
             IDENTIFIER x null\n\
             EQUAL = null\n\
             STRING \"hi\" hi\n\
             PLUS + null\n\
             NUMBER 123 123.0\n\
             DOT . null\n\
             SEMICOLON ; null\n\
             EOF  null\n",
        );
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let file = source_file("1 + 2");
    lox()
        .arg("--verbose")
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .success()
        .stdout("NUMBER 1 1.0\nPLUS + null\nNUMBER 2 2.0\nEOF  null\n")
        .stderr(predicate::str::contains("scan finished"));
}

#[test]
fn missing_file_is_usage_error() {
    lox()
        .arg("tokenize")
        .arg("does/not/exist.lox")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("failed to read does/not/exist.lox"));
}

#[test]
fn missing_arguments_is_usage_error() {
    lox().assert().code(1).stdout("");
    lox().arg("tokenize").assert().code(1).stdout("");
}

#[test]
fn unknown_command_is_usage_error() {
    let file = source_file("()");
    lox()
        .arg("parse")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn help_exits_cleanly() {
    lox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize"));
}

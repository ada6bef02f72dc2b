//! End-to-end CLI tests covering spec.md §8's seed scenarios, grounded on
//! `faxc-drv`'s `assert_cmd`-based integration test style.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", contents).expect("write temp file");
    file
}

fn truplc() -> Command {
    Command::cargo_bin("truplc").expect("find truplc binary")
}

#[test]
fn seed_scenario_4_exits_success() {
    let file = source_file("program foo0; begin print 10; end;");
    truplc()
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn seed_scenario_5_duplicate_declaration_fails_with_message() {
    let file = source_file("program foo; a: int; a: bool; begin print(a); end;");
    truplc()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("has been declared"));
}

#[test]
fn seed_scenario_6_undeclared_identifier_fails_with_message() {
    let file = source_file("program foo; begin print(a); end;");
    truplc()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("has not been declared"));
}

#[test]
fn seed_scenario_7_type_mismatch_fails() {
    let file = source_file(
        "program foo; a: int; b: bool; begin a := (a + 1) * (a - 1) + b; end;",
    );
    truplc()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type error"));
}

#[test]
fn seed_scenario_8_if_condition_type_mismatch_fails() {
    let file = source_file("program foo; begin if 1 then begin print(1); end; end;");
    truplc()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type error"));
}

#[test]
fn syntax_error_exits_nonzero() {
    let file = source_file("program foo begin end;");
    truplc().arg(file.path()).assert().failure();
}

#[test]
fn missing_file_argument_exits_nonzero() {
    truplc().assert().failure();
}

#[test]
fn nonexistent_file_exits_nonzero() {
    truplc()
        .arg("/nonexistent/path/does/not/exist.trupl")
        .assert()
        .failure();
}

#[test]
fn compile_subcommand_is_equivalent_to_bare_file_argument() {
    let file = source_file("program foo0; begin print 10; end;");
    truplc()
        .arg("compile")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn dump_tokens_prints_one_line_per_token_terminated_by_eof() {
    let file = source_file("int a = 1;");
    truplc()
        .arg("dump-tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kKeyword:kInt"))
        .stdout(predicate::str::contains("kIdentifier:a"))
        .stdout(predicate::str::contains("kRelOperator:kEqual"))
        .stdout(predicate::str::contains("kNumber:1"))
        .stdout(predicate::str::contains("kEOF:EndOfFile"));
}

#[test]
fn dump_tokens_reports_illegal_character() {
    let file = source_file("@");
    truplc()
        .arg("dump-tokens")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exiting on Scanner Fatal Error"));
}

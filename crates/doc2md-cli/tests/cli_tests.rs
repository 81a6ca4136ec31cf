//! End-to-end CLI tests.
//!
//! These only rely on the built-in html2text backend, so they pass on a
//! machine with none of the external converter tools installed.

use assert_cmd::Command;
use predicates::prelude::*;

fn doc2md() -> Command {
    Command::cargo_bin("doc2md").unwrap()
}

#[test]
fn test_list_shows_builtin_backend() {
    doc2md()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("html2text"));
}

#[test]
fn test_list_json_is_valid() {
    let output = doc2md().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let available = payload["available"].as_array().unwrap();
    assert!(
        available.iter().any(|info| info["id"] == "html2text"),
        "built-in backend should always be available"
    );
    assert!(payload["unavailable"].is_object());
}

#[test]
fn test_check_succeeds_with_builtin() {
    doc2md()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("converters available"));
}

#[test]
fn test_convert_html_selects_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.html");
    std::fs::write(
        &input,
        "<html><body><h1>Title</h1><p>hello from doc2md</p></body></html>",
    )
    .unwrap();

    doc2md()
        .arg("convert")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from doc2md"));
}

#[test]
fn test_convert_explicit_converter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.html");
    std::fs::write(&input, "<p>explicit selection</p>").unwrap();

    doc2md()
        .arg("convert")
        .arg(&input)
        .args(["--converter", "html2text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("explicit selection"));
}

#[test]
fn test_convert_output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.html");
    let output = dir.path().join("page.md");
    std::fs::write(&input, "<p>to a file</p>").unwrap();

    doc2md()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&output).unwrap();
    assert!(markdown.contains("to a file"));
}

#[test]
fn test_convert_unknown_converter_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.html");
    std::fs::write(&input, "<p>x</p>").unwrap();

    doc2md()
        .arg("convert")
        .arg(&input)
        .args(["--converter", "tika"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown converter"));
}

#[test]
fn test_convert_missing_file_fails() {
    doc2md()
        .arg("convert")
        .arg("/nonexistent/page.html")
        .assert()
        .failure();
}

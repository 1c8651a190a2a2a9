//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const PAGE: &str = r##"<html><body>
<a href="#domain">Domain</a>
<h2 id="domain">Domain Model</h2>
<pre><code>cargo build</code></pre>
</body></html>"##;

fn write_page(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, PAGE).unwrap();
    path
}

#[test]
fn enhance_writes_enhanced_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);
    let output = dir.path().join("out.html");

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("copy controls"));

    let enhanced = fs::read_to_string(&output).unwrap();
    assert!(enhanced.contains("copy-button"));
    assert!(enhanced.contains("architecture-layer domain-layer"));
    assert!(enhanced.contains("cargo build"));
}

#[test]
fn enhance_stdout_report_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);
    let output = dir.path().join("out.html");

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance", "--report"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"copy_controls\": 1"))
        .stdout(predicate::str::contains("\"anchor_links\": 1"))
        .stdout(predicate::str::contains("\"tagged_headings\": 1"));
}

#[test]
fn enhance_without_output_prints_clean_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<html>"))
        .stdout(predicate::str::contains("copy-button"));
}

#[test]
fn enhance_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance"])
        .arg(dir.path().join("absent.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn enhance_respects_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);
    let output = dir.path().join("out.html");
    let config = dir.path().join("pagelift.toml");
    fs::write(&config, "[layers]\nheading_levels = [\"h4\"]\n").unwrap();

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-C")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 headings tagged"));

    let enhanced = fs::read_to_string(&output).unwrap();
    assert!(!enhanced.contains("architecture-layer"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);
    let config = dir.path().join("pagelift.toml");
    fs::write(&config, "[layers]\nheading_levels = [\"header\"]\n").unwrap();

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["enhance"])
        .arg(&input)
        .arg("-C")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a heading level"));
}

#[test]
fn copy_rejects_block_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["copy", "--block", "0"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("block numbers start at 1"));
}

#[test]
fn copy_rejects_out_of_range_block() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(&dir);

    Command::cargo_bin("pagelift")
        .unwrap()
        .args(["copy", "--block", "5"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no code block 5"));
}

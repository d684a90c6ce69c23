use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

const PLAINTEXT: &str = include_str!("fixtures/plaintext.txt");
const SAMPLE: &str = include_str!("fixtures/sample.txt");

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("caesar-cipher").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn encrypt_and_decrypt_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.txt"), PLAINTEXT).unwrap();

    cli(&dir)
        .args(["encrypt", "--input", "plain.txt", "--output", "enc.txt", "--key", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypt: key 12 applied"));

    cli(&dir)
        .args(["decrypt", "-i", "enc.txt", "-o", "dec.txt", "-k", "12"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("dec.txt")).unwrap(),
        PLAINTEXT
    );
}

#[test]
fn negative_key_is_a_validation_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.txt"), "абв").unwrap();

    cli(&dir)
        .args(["encrypt", "-i", "plain.txt", "-o", "enc.txt", "-k", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key must be between 0 and 39, got -3"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    cli(&dir)
        .args(["decrypt", "-i", "absent.txt", "-o", "out.txt", "-k", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file does not exist"));
}

#[test]
fn analyze_reports_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.txt"), PLAINTEXT).unwrap();
    fs::write(dir.path().join("sample.txt"), SAMPLE).unwrap();

    cli(&dir)
        .args(["encrypt", "-i", "plain.txt", "-o", "enc.txt", "-k", "33"])
        .assert()
        .success();

    let output = cli(&dir)
        .args(["--json", "analyze", "-i", "enc.txt", "-o", "out.txt", "-s", "sample.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["operation"], "statistical-analysis");
    assert_eq!(report["key"], 33);
    assert!(report["distance"].as_f64().is_some());
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        PLAINTEXT
    );
}

#[test]
fn analyze_without_sample_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("enc.txt"), "абв").unwrap();

    cli(&dir)
        .args(["analyze", "-i", "enc.txt", "-o", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample file is required"));
}

#[test]
fn brute_force_marker_comes_from_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("enc.txt"), "абв").unwrap();
    fs::write(
        dir.path().join("caesar.toml"),
        "failure_message = \"ничего не найдено\"\n",
    )
    .unwrap();

    cli(&dir)
        .args(["brute-force", "-i", "enc.txt", "-o", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no key found"));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "ничего не найдено"
    );
}

#[test]
fn menu_is_the_default_command() {
    let dir = tempdir().unwrap();
    cli(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("4. Statistical analysis")
                .and(predicate::str::contains("Bye.")),
        );
}

#[test]
fn print_metrics_dumps_counters() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.txt"), "абв").unwrap();

    cli(&dir)
        .args(["--print-metrics", "encrypt", "-i", "plain.txt", "-o", "enc.txt", "-k", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "caesar_operations_total{operation=\"encrypt\"} 1",
        ));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.txt"), "абв").unwrap();

    cli(&dir)
        .args(["--config", "missing.toml", "encrypt"])
        .args(["-i", "plain.txt", "-o", "out.txt", "-k", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: config error: config file not found: missing.toml",
        ));

    assert!(!dir.path().join("out.txt").exists());
}

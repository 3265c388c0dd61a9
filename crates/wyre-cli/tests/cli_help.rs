use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("wyre")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keys"))
        .stdout(predicate::str::contains("widgets"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("wyre")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_keys_lists_key_map() {
    cargo_bin_cmd!("wyre")
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tab"))
        .stdout(predicate::str::contains("quit"));
}

#[test]
fn test_widgets_lists_demo_widgets() {
    cargo_bin_cmd!("wyre")
        .arg("widgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text size"))
        .stdout(predicate::str::contains("Opacity"))
        .stdout(predicate::str::contains("Switch"));
}

#[test]
fn test_demo_without_terminal_fails_cleanly() {
    // stdout is a pipe under assert_cmd, so the demo must refuse to start.
    cargo_bin_cmd!("wyre")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

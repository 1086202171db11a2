use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_commands_and_flags() {
    cargo_bin_cmd!("tudo")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--remote"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("tudo")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_remote_and_local_conflict() {
    cargo_bin_cmd!("tudo")
        .args(["--remote", "--local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("tudo")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

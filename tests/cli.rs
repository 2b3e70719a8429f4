use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".marketmind").join("config.json")
}

const BINARY_NAME: &str = "marketmind";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("sales and market intelligence"))
        .stdout(contains("scan"))
        .stdout(contains("pitch"));
}

#[test]
fn leads_command_lists_pipeline() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("leads")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Alex Rivera"))
        .stdout(contains("Blackwood Capital"));
}

#[test]
fn configure_command_writes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["configure", "--provider", "demo", "--industry", "Fintech"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"demo\""));
    assert!(saved.contains("Fintech"));
}

#[test]
fn configure_rejects_unknown_provider() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["configure", "--provider", "watson"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("unknown provider"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Resetting"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
fn pitch_for_unknown_lead_fails() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["pitch", "--lead", "99", "--demo"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("No lead with ID 99"));
}

#[test]
fn demo_pitch_prints_script() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["pitch", "--lead", "1", "--demo"])
        .env("HOME", tmp.path())
        .env_remove("MARKETMIND_PROVIDER")
        .assert()
        .success()
        .stdout(contains("PITCH FOR Alex Rivera"))
        .stdout(contains("The close:"));
}

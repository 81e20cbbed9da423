use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create an empty HOME so no rc file is picked up
fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    (temp_dir, guard)
}

fn get_studio_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("service-studio").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd
}

#[test]
fn test_version_command() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    get_studio_cmd(&temp_dir)
        .args(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("service-studio"));
}

#[test]
fn test_help_lists_pages() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("customers"))
        .stdout(predicate::str::contains("ai-settings"))
        .stdout(predicate::str::contains("classify"));
}

//! Error reporting for cataloger launch failures

mod common;

use predicates::prelude::*;

#[test]
fn test_download_with_missing_cataloger() {
    let workspace = common::TestWorkspace::new();
    let missing = workspace.bin.path().join("offline-cataloger");

    common::opcert_cmd_for_workspace(&workspace.path, Some(&missing))
        .arg("download")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"))
        .stderr(predicate::str::contains("program not found"));
}

#[test]
fn test_cataloger_flag_overrides_env() {
    let workspace = common::TestWorkspace::new();
    let from_env = workspace.bin.path().join("from-env");
    let from_flag = workspace.bin.path().join("from-flag");

    common::opcert_cmd_for_workspace(&workspace.path, Some(&from_env))
        .args(["download", "--cataloger", from_flag.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-flag"));
}

#[test]
fn test_failed_launch_keeps_manifests_on_download() {
    let workspace = common::TestWorkspace::new();
    workspace.create_manifests("a", &["etcd"]);
    let missing = workspace.bin.path().join("offline-cataloger");

    common::opcert_cmd_for_workspace(&workspace.path, Some(&missing))
        .arg("download")
        .assert()
        .failure();

    assert!(workspace.file_exists("manifests-a/etcd"));
}

#[cfg(unix)]
#[test]
fn test_non_executable_cataloger() {
    let workspace = common::TestWorkspace::new();
    let script = workspace.bin.path().join("offline-cataloger");
    std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();

    common::opcert_cmd_for_workspace(&workspace.path, Some(&script))
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"));
}

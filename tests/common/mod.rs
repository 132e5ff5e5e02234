//! Common test utilities for opcert integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace for integration tests
///
/// The workspace directory and the directory holding fake cataloger scripts
/// are separate, so cleaning the workspace never touches the scripts.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary workspace directory
    pub temp: TempDir,
    /// Temporary directory for fake binaries
    pub bin: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bin = TempDir::new().expect("Failed to create bin directory");
        let path = temp.path().to_path_buf();
        Self { temp, bin, path }
    }

    /// Create `manifests-<suffix>` with the given bundle directories
    pub fn create_manifests(&self, suffix: &str, bundles: &[&str]) -> PathBuf {
        let dir = self.path.join(format!("manifests-{suffix}"));
        std::fs::create_dir_all(&dir).expect("Failed to create manifest directory");
        for bundle in bundles {
            std::fs::create_dir_all(dir.join(bundle)).expect("Failed to create bundle directory");
        }
        dir
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file or directory exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of workspace entries carrying the manifest prefix
    pub fn manifest_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to read workspace")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .filter(|n| n.starts_with("manifests-"))
            .collect();
        names.sort();
        names
    }

    /// Write an executable fake cataloger running `body` with `sh`
    ///
    /// The script records its arguments to `<bin>/args.log`.
    #[cfg(unix)]
    pub fn fake_cataloger(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.bin.path().join("offline-cataloger");
        let log = self.bin.path().join("args.log");
        let content = format!("#!/bin/sh\necho \"$@\" > '{}'\n{}\n", log.display(), body);
        std::fs::write(&script, content).expect("Failed to write fake cataloger");

        let mut perms = std::fs::metadata(&script)
            .expect("Failed to stat fake cataloger")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).expect("Failed to chmod fake cataloger");
        script
    }

    /// Arguments the fake cataloger was last called with
    pub fn recorded_args(&self) -> String {
        std::fs::read_to_string(self.bin.path().join("args.log"))
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an opcert command isolated from the caller's environment
#[allow(deprecated, dead_code)]
pub fn opcert_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("opcert").expect("Failed to find opcert binary");
    cmd.env_remove("OPCERT_WORKSPACE")
        .env_remove("OPCERT_CATALOGER")
        .env_remove("RUST_LOG");
    cmd
}

/// Build an opcert command for `workspace`, using `cataloger` as the binary
#[allow(dead_code)]
pub fn opcert_cmd_for_workspace(workspace: &Path, cataloger: Option<&Path>) -> assert_cmd::Command {
    let mut cmd = opcert_cmd();
    cmd.current_dir(workspace).env("OPCERT_WORKSPACE", workspace);
    if let Some(cataloger) = cataloger {
        cmd.env("OPCERT_CATALOGER", cataloger);
    }
    cmd
}

//! External manifest generation
//!
//! The cataloger is an opaque binary: run it in the working directory and
//! it leaves one or more `manifests-*` directories behind. Its stdout is
//! discarded; its exit status is always checked.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, launch_failed, process_failed};

/// Default cataloging binary, resolved through `PATH`
pub const DEFAULT_PROGRAM: &str = "offline-cataloger";

/// Arguments that generate manifests for certified operators
pub const DEFAULT_ARGS: [&str; 2] = ["generate-manifests", "certified-operators"];

/// How many trailing stderr lines are kept for error reports
const STDERR_TAIL_LINES: usize = 20;

/// Something that populates a working directory with manifest directories
pub trait Cataloger {
    /// Generate manifests into `workdir`, blocking until done
    fn generate(&self, workdir: &Path) -> Result<()>;
}

impl<F> Cataloger for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn generate(&self, workdir: &Path) -> Result<()> {
        self(workdir)
    }
}

/// The `offline-cataloger` binary
#[derive(Debug, Clone)]
pub struct OfflineCataloger {
    program: PathBuf,
    args: Vec<String>,
}

impl Default for OfflineCataloger {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl OfflineCataloger {
    /// Use `program` with the certified-operators arguments
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self::with_args(program, DEFAULT_ARGS)
    }

    /// Use `program` with custom arguments
    pub fn with_args<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the child process command for `workdir`
    pub fn command(&self, workdir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }

    fn display_name(&self) -> String {
        self.program().display().to_string()
    }
}

impl Cataloger for OfflineCataloger {
    fn generate(&self, workdir: &Path) -> Result<()> {
        tracing::info!(
            program = %self.display_name(),
            args = ?self.args(),
            workdir = %workdir.display(),
            "running cataloger"
        );

        let output = self
            .command(workdir)
            .output()
            .map_err(|e| launch_failed(self.display_name(), describe_spawn_error(&e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(process_failed(
                self.display_name(),
                output.status.code(),
                stderr_tail(&stderr),
            ));
        }

        if !stderr.trim().is_empty() {
            tracing::debug!(stderr = %stderr.trim_end(), "cataloger diagnostics");
        }
        Ok(())
    }
}

fn describe_spawn_error(err: &std::io::Error) -> String {
    match err.kind() {
        ErrorKind::NotFound => "program not found".to_string(),
        ErrorKind::PermissionDenied => "permission denied (is it executable?)".to_string(),
        _ => err.to_string(),
    }
}

/// Keep the last few lines of the child's stderr
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim_end().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

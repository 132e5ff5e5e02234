//! Error types and handling for opcert
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cataloger`]: External cataloger process errors
//! - [`fs`]: File system errors
//! - [`workspace`]: Workspace errors

pub mod cataloger;
pub mod fs;
pub mod workspace;

#[allow(unused_imports)]
pub use cataloger::{launch_failed, process_failed};
#[allow(unused_imports)]
pub use fs::{invalid_pattern, io_error, read_dir_failed, remove_failed};
#[allow(unused_imports)]
pub use workspace::not_found as workspace_not_found;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for opcert operations
#[derive(Error, Diagnostic, Debug)]
pub enum CatalogError {
    // Cataloger errors
    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(opcert::cataloger::launch_failed),
        help("Check that offline-cataloger is installed and on PATH, or pass --cataloger <path>")
    )]
    LaunchFailed { program: String, reason: String },

    #[error("'{program}' exited with {}", describe_exit(*.code))]
    #[diagnostic(
        code(opcert::cataloger::process_failed),
        help("Inspect the cataloger output above; partially written manifest directories may remain")
    )]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(opcert::workspace::not_found),
        help("Pass an existing directory with --workspace or OPCERT_WORKSPACE")
    )]
    WorkspaceNotFound { path: String },

    // File system errors
    #[error("Failed to remove '{path}': {reason}")]
    #[diagnostic(code(opcert::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(opcert::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(opcert::fs::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(opcert::fs::io_error))]
    IoError { message: String },

    // Presentation errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(opcert::ui::prompt_failed))]
    PromptFailed { message: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(opcert::ui::serialization))]
    Serialization { message: String },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CatalogError {
    fn from(err: inquire::InquireError) -> Self {
        CatalogError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CatalogError>;

//! External cataloger process errors

use super::CatalogError;

/// Creates a launch failed error
pub fn launch_failed(program: impl Into<String>, reason: impl Into<String>) -> CatalogError {
    CatalogError::LaunchFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a process failed error from the child's exit code and captured stderr
pub fn process_failed(
    program: impl Into<String>,
    code: Option<i32>,
    stderr: impl Into<String>,
) -> CatalogError {
    CatalogError::ProcessFailed {
        program: program.into(),
        code,
        stderr: stderr.into(),
    }
}

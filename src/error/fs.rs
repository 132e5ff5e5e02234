//! File system errors

use std::path::Path;

use super::CatalogError;

/// Creates a remove failed error
pub fn remove_failed(path: impl AsRef<Path>, reason: impl ToString) -> CatalogError {
    CatalogError::RemoveFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a read directory failed error
pub fn read_dir_failed(path: impl AsRef<Path>, reason: impl ToString) -> CatalogError {
    CatalogError::ReadDirFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> CatalogError {
    CatalogError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CatalogError {
    CatalogError::IoError {
        message: message.into(),
    }
}

//! Workspace errors

use std::path::Path;

use super::CatalogError;

/// Creates a workspace not found error
pub fn not_found(path: impl AsRef<Path>) -> CatalogError {
    CatalogError::WorkspaceNotFound {
        path: path.as_ref().display().to_string(),
    }
}

//! Download command implementation
//!
//! Runs the cataloger in the workspace and reports what it cached.
//! Existing manifest directories are left in place.

use std::path::{Path, PathBuf};

use super::helpers::{open_cache, report_cached, status_cataloger};
use crate::error::Result;

/// Run download command
pub fn run(workspace: Option<PathBuf>, cataloger: &Path) -> Result<()> {
    let mut cache = open_cache(workspace)?;
    cache.download(&status_cataloger(cataloger))?;
    report_cached(&cache)
}

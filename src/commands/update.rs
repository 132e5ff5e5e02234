//! Update command implementation
//!
//! Clean followed by download. Not atomic: if the cataloger fails after the
//! clean, the workspace is left without manifests.

use std::path::{Path, PathBuf};

use super::helpers::{open_cache, report_cached, status_cataloger};
use crate::error::Result;

/// Run update command
pub fn run(workspace: Option<PathBuf>, cataloger: &Path) -> Result<()> {
    let mut cache = open_cache(workspace)?;
    cache.update(&status_cataloger(cataloger))?;
    report_cached(&cache)
}

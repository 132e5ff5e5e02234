//! Clean command implementation
//!
//! Removes every `manifests-*` entry from the workspace.

use std::path::PathBuf;

use super::helpers::{open_cache, report_clean};
use crate::error::Result;

/// Run clean command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let mut cache = open_cache(workspace)?;
    let removed = cache.clean()?;
    report_clean(removed);
    Ok(())
}

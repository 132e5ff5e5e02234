//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cache::BundleCache;
use crate::cataloger::OfflineCataloger;
use crate::error::{Result, io_error, workspace_not_found};
use crate::progress::WithProgress;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise, resolve to the
/// current directory. The result must be an existing directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };

    if !path.is_dir() {
        return Err(workspace_not_found(&path));
    }

    Ok(path)
}

/// Open the bundle cache for the resolved workspace
pub fn open_cache(workspace: Option<PathBuf>) -> Result<BundleCache> {
    let cache = BundleCache::new(resolve_workspace_path(workspace)?);
    tracing::debug!(root = %cache.root().display(), "using workspace");
    Ok(cache)
}

/// The cataloger at `program`, with download status output
pub fn status_cataloger(program: &Path) -> WithProgress<OfflineCataloger> {
    WithProgress::new(OfflineCataloger::new(program))
}

/// Print the outcome of a clean
pub fn report_clean(removed: usize) {
    if removed == 0 {
        println!("No manifest directories to remove.");
    } else {
        println!(
            "Removed {} manifest entr{}.",
            removed,
            if removed == 1 { "y" } else { "ies" }
        );
    }
}

/// Print a one-line summary of the cached bundles
pub fn report_cached(cache: &BundleCache) -> Result<()> {
    let bundles = cache.bundles();
    let dirs = cache.manifest_dirs()?.len();
    println!(
        "Cached {} bundle{} in {} manifest director{}.",
        bundles.len(),
        if bundles.len() == 1 { "" } else { "s" },
        dirs,
        if dirs == 1 { "y" } else { "ies" }
    );
    Ok(())
}

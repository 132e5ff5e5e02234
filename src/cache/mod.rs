//! Local bundle cache
//!
//! The cache is nothing more than the `manifests-*` directories the
//! cataloger leaves in a working directory:
//!
//! ```text
//! <workspace>/
//! ├── manifests-<suffix>/
//! │   ├── <bundle>
//! │   └── <bundle>
//! └── manifests-<suffix>/
//!     └── <bundle>
//! ```
//!
//! [`BundleCache`] drives its lifecycle (clean, download, update, list) and
//! keeps the bundle sequence from the last scan in memory. The working
//! directory is always the one the cache was created with; the process
//! current directory is never consulted.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cataloger::Cataloger;
use crate::error::{Result, remove_failed};

pub mod paths;
pub mod scan;

use scan::PrefixedEntry;

/// A `manifests-` prefixed directory inside the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDir {
    /// Directory name, including the prefix
    pub name: String,
    /// Full path to the directory
    pub path: PathBuf,
}

/// One certified-operator bundle: an immediate child of a manifest directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntry {
    pub name: String,
    /// Name of the manifest directory holding this entry
    pub manifest_dir: String,
}

impl fmt::Display for BundleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Manifest bundle cache bound to one working directory
#[derive(Debug)]
pub struct BundleCache {
    root: PathBuf,
    bundles: Vec<BundleEntry>,
}

impl BundleCache {
    /// Create a cache over `root`. Nothing is read until an operation runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bundles: Vec::new(),
        }
    }

    /// Working directory this cache manages
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bundles found by the last download, update or list
    pub fn bundles(&self) -> &[BundleEntry] {
        &self.bundles
    }

    /// Current manifest directories in scan order
    pub fn manifest_dirs(&self) -> Result<Vec<ManifestDir>> {
        scan::manifest_dirs(&self.root)
    }

    /// Remove every `manifests-` prefixed entry of the working directory
    ///
    /// Returns the number of removed entries. Stops at the first failure;
    /// entries removed before it stay removed.
    pub fn clean(&mut self) -> Result<usize> {
        let entries = scan::prefixed_entries(&self.root)?;
        let removed = remove_entries(&entries)?;

        self.bundles.clear();
        tracing::info!(root = %self.root.display(), removed, "cleaned manifest cache");
        Ok(removed)
    }

    /// Run the cataloger in the working directory, then rescan
    ///
    /// The bundle list is rebuilt from scratch, so repeated downloads never
    /// duplicate entries. If the cataloger fails the previous list is kept.
    pub fn download(&mut self, cataloger: &dyn Cataloger) -> Result<&[BundleEntry]> {
        cataloger.generate(&self.root)?;
        self.rescan()
    }

    /// [`clean`](Self::clean) followed by [`download`](Self::download)
    ///
    /// Not atomic: a failed download leaves the cache empty.
    pub fn update(&mut self, cataloger: &dyn Cataloger) -> Result<&[BundleEntry]> {
        self.clean()?;
        self.download(cataloger)
    }

    /// Rescan the manifest directories without running the cataloger
    pub fn list(&mut self) -> Result<&[BundleEntry]> {
        self.rescan()
    }

    fn rescan(&mut self) -> Result<&[BundleEntry]> {
        let mut bundles = Vec::new();
        for dir in scan::manifest_dirs(&self.root)? {
            bundles.extend(scan::bundle_entries(&dir)?);
        }

        tracing::debug!(count = bundles.len(), "rebuilt bundle list");
        self.bundles = bundles;
        Ok(&self.bundles)
    }
}

/// Remove `entries` in order, stopping at the first failure
fn remove_entries(entries: &[PrefixedEntry]) -> Result<usize> {
    let mut removed = 0;

    for entry in entries {
        let result = if entry.file_type.is_dir() {
            fs::remove_dir_all(&entry.path)
        } else {
            fs::remove_file(&entry.path)
        };
        result.map_err(|e| remove_failed(&entry.path, e))?;

        tracing::debug!(path = %entry.path.display(), "removed manifest entry");
        removed += 1;
    }

    Ok(removed)
}

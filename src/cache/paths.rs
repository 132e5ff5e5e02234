//! Manifest directory naming
//!
//! The cataloger writes each batch of manifests into a directory named
//! `manifests-<suffix>` directly under the working directory. Everything
//! carrying that prefix belongs to the cache.

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, invalid_pattern};

/// Manifest directory names, matched against a single path component
pub const MANIFEST_GLOB: &str = "manifests-*";

/// Compiled [`MANIFEST_GLOB`], built once per scan
pub struct ManifestMatcher {
    glob: Glob<'static>,
}

impl ManifestMatcher {
    pub fn new() -> Result<Self> {
        let glob = Glob::new(MANIFEST_GLOB).map_err(|e| invalid_pattern(MANIFEST_GLOB, e))?;
        Ok(Self { glob })
    }

    /// Check whether a working-directory entry name belongs to the cache
    ///
    /// `name` is a single file name as reported by the directory walk. Any
    /// character other than the platform separator is part of the suffix.
    pub fn matches(&self, name: &str) -> bool {
        self.glob.matched(&CandidatePath::from(name)).is_some()
    }
}

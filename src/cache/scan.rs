//! Working directory enumeration
//!
//! Both levels of the cache are read with a single-depth walk so the
//! resulting order is whatever the filesystem reports. No sorting happens
//! here.

use std::fs::FileType;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::paths::ManifestMatcher;
use super::{BundleEntry, ManifestDir};
use crate::error::{Result, read_dir_failed};

/// A direct child of the working directory carrying the manifest prefix
#[derive(Debug, Clone)]
pub struct PrefixedEntry {
    pub name: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

/// List the immediate children of `dir` as (name, path, type) triples
fn children(dir: &Path) -> Result<Vec<(String, PathBuf, FileType)>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| read_dir_failed(dir, e))?;
        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                let lossy = entry.file_name().to_string_lossy().to_string();
                tracing::warn!(
                    path = %entry.path().display(),
                    name = %lossy,
                    "entry name is not valid UTF-8; reported name will not match the file system"
                );
                lossy
            }
        };
        entries.push((name, entry.path().to_path_buf(), entry.file_type()));
    }

    Ok(entries)
}

/// Every entry of `root` whose name carries the manifest prefix, of any type
pub fn prefixed_entries(root: &Path) -> Result<Vec<PrefixedEntry>> {
    let matcher = ManifestMatcher::new()?;
    Ok(children(root)?
        .into_iter()
        .filter(|(name, _, _)| matcher.matches(name))
        .map(|(name, path, file_type)| PrefixedEntry {
            name,
            path,
            file_type,
        })
        .collect())
}

/// Manifest directories of `root` in scan order
///
/// Prefixed entries that are not directories are skipped; symlinks are not
/// followed.
pub fn manifest_dirs(root: &Path) -> Result<Vec<ManifestDir>> {
    let mut dirs = Vec::new();

    for entry in prefixed_entries(root)? {
        if entry.file_type.is_dir() {
            dirs.push(ManifestDir {
                name: entry.name,
                path: entry.path,
            });
        } else {
            tracing::warn!(path = %entry.path.display(), "skipping prefixed entry that is not a directory");
        }
    }

    tracing::debug!(root = %root.display(), count = dirs.len(), "scanned manifest directories");
    Ok(dirs)
}

/// Bundle entries directly inside one manifest directory, in scan order
pub fn bundle_entries(dir: &ManifestDir) -> Result<Vec<BundleEntry>> {
    Ok(children(&dir.path)?
        .into_iter()
        .map(|(name, _, _)| BundleEntry {
            name,
            manifest_dir: dir.name.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prefixed_entries_includes_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("manifests-a")).unwrap();
        fs::write(temp.path().join("manifests-stray"), "x").unwrap();
        fs::create_dir(temp.path().join("other")).unwrap();

        let mut names: Vec<String> = prefixed_entries(temp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["manifests-a", "manifests-stray"]);
    }

    #[test]
    fn test_manifest_dirs_skips_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("manifests-a")).unwrap();
        fs::write(temp.path().join("manifests-stray"), "x").unwrap();

        let dirs = manifest_dirs(temp.path()).unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].name, "manifests-a");
        assert_eq!(dirs[0].path, temp.path().join("manifests-a"));
    }

    #[test]
    fn test_bundle_entries_lists_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let dir_path = temp.path().join("manifests-a");
        fs::create_dir_all(dir_path.join("etcd-operator/0.9.4")).unwrap();
        fs::write(dir_path.join("README"), "notes").unwrap();

        let dir = ManifestDir {
            name: "manifests-a".to_string(),
            path: dir_path,
        };
        let mut names: Vec<String> = bundle_entries(&dir)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();

        // Only immediate children, not the nested version directory
        assert_eq!(names, vec!["README", "etcd-operator"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_bundle_name_is_kept_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let dir_path = temp.path().join("manifests-a");
        fs::create_dir_all(dir_path.join(OsStr::from_bytes(b"etcd-\xff"))).unwrap();

        let dir = ManifestDir {
            name: "manifests-a".to_string(),
            path: dir_path,
        };
        let entries = bundle_entries(&dir).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "etcd-\u{FFFD}");
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = manifest_dirs(&temp.path().join("missing"));
        assert!(matches!(
            result,
            Err(crate::error::CatalogError::ReadDirFailed { .. })
        ));
    }
}

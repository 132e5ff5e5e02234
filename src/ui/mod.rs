//! Presentation layer for the bundle list
//!
//! The cache only produces an ordered sequence of [`BundleEntry`] values.
//! How that sequence reaches the user is decided here:
//! - [`TextPresenter`]: plain listing grouped by manifest directory
//! - [`SelectPresenter`]: interactive single selection
//! - [`JsonPresenter`]: machine-readable array

use crate::cache::BundleEntry;
use crate::error::Result;

pub mod json;
pub mod select;
pub mod text;

pub use json::JsonPresenter;
pub use select::SelectPresenter;
pub use text::TextPresenter;

/// Something that shows bundles to the user
pub trait Presenter {
    /// Present `bundles`, returning the chosen bundle name when the
    /// presenter lets the user pick one
    fn present(&self, bundles: &[BundleEntry]) -> Result<Option<String>>;
}

/// Split `bundles` into runs sharing the same manifest directory, keeping order
pub fn group_by_manifest_dir(bundles: &[BundleEntry]) -> Vec<(&str, Vec<&BundleEntry>)> {
    let mut groups: Vec<(&str, Vec<&BundleEntry>)> = Vec::new();

    for bundle in bundles {
        match groups.last_mut() {
            Some((dir, entries)) if *dir == bundle.manifest_dir.as_str() => entries.push(bundle),
            _ => groups.push((bundle.manifest_dir.as_str(), vec![bundle])),
        }
    }

    groups
}

#[cfg(test)]
pub(crate) fn entry(name: &str, manifest_dir: &str) -> BundleEntry {
    BundleEntry {
        name: name.to_string(),
        manifest_dir: manifest_dir.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_manifest_dir_keeps_order() {
        let bundles = vec![
            entry("x", "manifests-b"),
            entry("y", "manifests-b"),
            entry("z", "manifests-a"),
        ];

        let groups = group_by_manifest_dir(&bundles);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "manifests-b");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "manifests-a");
        assert_eq!(groups[1].1[0].name, "z");
    }

    #[test]
    fn test_group_by_manifest_dir_empty() {
        assert!(group_by_manifest_dir(&[]).is_empty());
    }
}

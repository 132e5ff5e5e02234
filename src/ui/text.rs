//! Plain text listing

use std::fmt::Write as _;

use console::Style;

use super::{Presenter, group_by_manifest_dir};
use crate::cache::BundleEntry;
use crate::error::Result;

/// Prints bundle names one per line, under their manifest directory
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl TextPresenter {
    /// Render the listing without printing it
    pub fn render(&self, bundles: &[BundleEntry]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Listing existing certified bundles...");
        let _ = writeln!(out, "---------------------------------");

        if bundles.is_empty() {
            let _ = writeln!(out, "No certified bundles cached.");
            return out;
        }

        for (dir, entries) in group_by_manifest_dir(bundles) {
            let _ = writeln!(
                out,
                "{} ({} bundle{})",
                Style::new().bold().yellow().apply_to(dir),
                entries.len(),
                if entries.len() == 1 { "" } else { "s" }
            );
            for entry in entries {
                let _ = writeln!(out, "  {}", entry.name);
            }
        }

        out
    }
}

impl Presenter for TextPresenter {
    fn present(&self, bundles: &[BundleEntry]) -> Result<Option<String>> {
        print!("{}", self.render(bundles));
        Ok(None)
    }
}

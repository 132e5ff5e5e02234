//! JSON output

use super::Presenter;
use crate::cache::BundleEntry;
use crate::error::Result;

/// Prints the bundle list as a JSON array
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn render(&self, bundles: &[BundleEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(bundles)?)
    }
}

impl Presenter for JsonPresenter {
    fn present(&self, bundles: &[BundleEntry]) -> Result<Option<String>> {
        println!("{}", self.render(bundles)?);
        Ok(None)
    }
}

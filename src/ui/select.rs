//! Interactive single selection

use inquire::Select;

use super::Presenter;
use crate::cache::BundleEntry;
use crate::error::Result;

/// Lets the user pick one bundle from the list
#[derive(Debug, Clone)]
pub struct SelectPresenter {
    prompt: String,
    page_size: usize,
}

impl Default for SelectPresenter {
    fn default() -> Self {
        Self {
            prompt: "Select a certified bundle".to_string(),
            page_size: 10,
        }
    }
}

impl Presenter for SelectPresenter {
    fn present(&self, bundles: &[BundleEntry]) -> Result<Option<String>> {
        if bundles.is_empty() {
            println!("No certified bundles cached.");
            return Ok(None);
        }

        let Some(selection) = Select::new(&self.prompt, bundles.to_vec())
            .with_starting_cursor(0)
            .with_page_size(self.page_size)
            .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
            .prompt_skippable()?
        else {
            return Ok(None);
        };

        Ok(Some(selection.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_does_not_prompt() {
        let presenter = SelectPresenter::default();
        assert_eq!(presenter.present(&[]).unwrap(), None);
    }
}

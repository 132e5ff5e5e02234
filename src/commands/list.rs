//! List command implementation
//!
//! Lists the bundles of every manifest directory in the workspace, as text,
//! JSON or an interactive single selection.

use std::path::{Path, PathBuf};

use super::helpers::{open_cache, status_cataloger};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::{JsonPresenter, Presenter, SelectPresenter, TextPresenter};

/// Run list command
pub fn run(workspace: Option<PathBuf>, cataloger: &Path, args: ListArgs) -> Result<()> {
    let mut cache = open_cache(workspace)?;

    let bundles = if args.refresh {
        cache.update(&status_cataloger(cataloger))?
    } else {
        cache.list()?
    };

    let presenter = presenter_for(&args);
    if let Some(selected) = presenter.present(bundles)? {
        println!("{selected}");
    }

    Ok(())
}

fn presenter_for(args: &ListArgs) -> Box<dyn Presenter> {
    if args.select {
        Box::new(SelectPresenter::default())
    } else if args.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(TextPresenter)
    }
}

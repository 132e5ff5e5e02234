//! Spinner shown while the cataloger runs

use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cataloger::Cataloger;
use crate::error::Result;

/// Spinner on stderr, hidden when stderr is not a terminal
pub struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Start spinning with `message`
    pub fn start(message: &str) -> Self {
        if !Term::stderr().is_term() {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Stop and erase the spinner
    pub fn finish(&self) {
        if let Some(ref pb) = self.pb {
            pb.finish_and_clear();
        }
    }

    /// Abandon on error, leaving the last message visible
    pub fn abandon(&self) {
        if let Some(ref pb) = self.pb {
            pb.abandon();
        }
    }
}

/// Cataloger wrapper that announces the download and spins while it runs
pub struct WithProgress<C> {
    inner: C,
}

impl<C: Cataloger> WithProgress<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cataloger> Cataloger for WithProgress<C> {
    fn generate(&self, workdir: &Path) -> Result<()> {
        println!("Downloading manifests for selected certified operators...");
        let spinner = Spinner::start("Generating manifests");

        match self.inner.generate(workdir) {
            Ok(()) => {
                spinner.finish();
                println!("Done.");
                Ok(())
            }
            Err(e) => {
                spinner.abandon();
                Err(e)
            }
        }
    }
}

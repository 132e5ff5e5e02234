//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for commands with arguments:
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cataloger::DEFAULT_PROGRAM;

pub mod completions;
pub mod list;

pub use completions::CompletionsArgs;
pub use list::ListArgs;

/// opcert - certified operator bundle cache
///
/// Download, cache and list certified operator manifest bundles.
#[derive(Parser, Debug)]
#[command(
    name = "opcert",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Download, cache and list certified operator manifest bundles",
    long_about = "opcert runs offline-cataloger to generate certified operator manifests into \
                  manifests-* directories of the workspace, and lists the bundles they contain.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  opcert update                  \x1b[90m# Replace cached manifests with fresh ones\x1b[0m\n   \
                  opcert list                    \x1b[90m# List cached bundles\x1b[0m\n   \
                  opcert list --refresh --select \x1b[90m# Update, then pick a bundle\x1b[0m\n   \
                  opcert clean                   \x1b[90m# Remove all manifest directories\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory holding the manifests-* directories (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "OPCERT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Cataloging binary to run
    #[arg(
        long,
        global = true,
        env = "OPCERT_CATALOGER",
        value_name = "PATH",
        default_value = DEFAULT_PROGRAM
    )]
    pub cataloger: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove all manifests-* entries from the workspace
    Clean,

    /// Run the cataloger and cache the generated manifests
    Download,

    /// Clean, then download
    Update,

    /// List cached bundles
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

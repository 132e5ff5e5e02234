//! opcert - certified operator bundle cache
//!
//! Wraps the `offline-cataloger` binary to download certified operator
//! manifests into `manifests-*` directories of a workspace, and lists the
//! bundles those directories hold.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cache;
mod cataloger;
mod cli;
mod commands;
mod error;
mod progress;
mod ui;

use cli::{Cli, Commands};

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "opcert=debug" } else { "opcert=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Clean => commands::clean::run(cli.workspace),
        Commands::Download => commands::download::run(cli.workspace, &cli.cataloger),
        Commands::Update => commands::update::run(cli.workspace, &cli.cataloger),
        Commands::List(args) => commands::list::run(cli.workspace, &cli.cataloger, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let error::CatalogError::ProcessFailed { stderr, .. } = &e {
            if !stderr.is_empty() {
                eprintln!("{stderr}");
            }
        }
        std::process::exit(1);
    }
}

use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List cached bundles:\n    opcert list\n\n\
                  Update the cache first:\n    opcert list --refresh\n\n\
                  Pick one bundle interactively:\n    opcert list --select\n\n\
                  Machine-readable output:\n    opcert list --json")]
pub struct ListArgs {
    /// Run a full update (clean and download) before listing
    #[arg(long, short = 'r')]
    pub refresh: bool,

    /// Choose a single bundle interactively and print its name
    #[arg(long, short = 's', conflicts_with = "json")]
    pub select: bool,

    /// Print the bundle list as JSON
    #[arg(long)]
    pub json: bool,
}

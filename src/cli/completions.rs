use clap::Args;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Args, Debug)]
#[command(after_help = "Write the script to stdout and source it from your shell startup, e.g.\n  \
                  opcert completions bash > ~/.local/share/bash-completion/completions/opcert\n  \
                  opcert completions zsh > \"${fpath[1]}/_opcert\"")]
pub struct CompletionsArgs {
    /// Shell to generate the completion script for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

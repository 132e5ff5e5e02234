//! Version command implementation

use crate::cataloger::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("opcert {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!(
        "  Cataloger: {} {}",
        DEFAULT_PROGRAM,
        DEFAULT_ARGS.join(" ")
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

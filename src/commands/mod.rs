//! Command implementations for the opcert CLI

pub mod clean;
pub mod completions;
pub mod download;
pub mod helpers;
pub mod list;
pub mod update;
pub mod version;

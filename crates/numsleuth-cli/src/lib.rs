//! NumSleuth CLI — clap-based command-line frontend.
//!
//! This crate contains argument parsing and output rendering. Business logic
//! lives in `numsleuth-core`.
pub mod cli;
pub mod commands;
pub mod output;

pub use cli::Cli;
pub use commands::run;

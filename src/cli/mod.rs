pub mod abbrev;
pub mod commands;
pub mod error;
pub mod output;

pub use commands::{run, Cli, Commands};

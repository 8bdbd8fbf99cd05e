//! The `global-styles` command.

pub mod cli;
mod run;

pub use cli::{Cli, Command, Format};
pub use run::run;

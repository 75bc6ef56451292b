pub mod args;
pub mod commands;
pub mod completions;

pub use args::Cli;
pub use commands::{dispatch, handle_command};

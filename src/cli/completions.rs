use crate::cli::args::{Cli, CompletionCommands};
use crate::utils::errors::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::Write;

pub fn handle_completion_command<W: Write>(command: &CompletionCommands, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let app_name = cmd.get_name().to_string();

    generate(command.shell(), &mut cmd, app_name, out);
    Ok(())
}

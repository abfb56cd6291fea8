//! Config command
//!
//! Usage: commandex config show

use clap::{Args, Subcommand};

use super::GlobalArgs;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
}

pub fn execute(global: &GlobalArgs, args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ConfigCommand::Show => {
            let config = super::resolve_config(global)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

//! Explore command
//!
//! Usage: commandex explore <COMMANDS_JSON>

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use commandex_engine::WorkbenchCommand;

use super::GlobalArgs;

#[derive(Debug, Args)]
pub struct ExploreArgs {
    /// JSON file holding an array of commands
    pub commands: PathBuf,
}

pub fn execute(global: &GlobalArgs, args: ExploreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::resolve_config(global)?;
    super::init_logging(&config)?;

    let store = super::load_commands(&args.commands)?;
    let (mut workbench, explorer, _) = super::headless_workbench(&config, store)?;

    workbench.apply(WorkbenchCommand::Open, Instant::now())?;
    workbench.shutdown();

    print!("{}", explorer.rendered());
    Ok(())
}

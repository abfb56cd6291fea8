//! Palette command
//!
//! Usage: commandex palette <COMMANDS_JSON> [--filter <TEXT>]

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use commandex_engine::WorkbenchCommand;

use super::GlobalArgs;

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// JSON file holding an array of commands
    pub commands: PathBuf,

    /// Case-insensitive name filter
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn execute(global: &GlobalArgs, args: PaletteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::resolve_config(global)?;
    super::init_logging(&config)?;

    let store = super::load_commands(&args.commands)?;
    let (mut workbench, _, palette) = super::headless_workbench(&config, store)?;

    let now = Instant::now();
    workbench.apply(WorkbenchCommand::ShowPalette, now)?;
    if let Some(filter) = args.filter {
        workbench.apply(WorkbenchCommand::FilterPalette { filter }, now)?;
    }
    workbench.shutdown();

    let rendered = palette.rendered();
    if rendered.is_empty() {
        println!("No matching commands");
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

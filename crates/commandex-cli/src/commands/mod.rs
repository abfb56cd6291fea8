//! Subcommands and the setup they share

pub mod config;
pub mod explore;
pub mod palette;

use std::path::{Path, PathBuf};

use clap::Args;
use commandex_core::logging_facility::{self, Profile};
use commandex_core::{Command, CommandStore, CommandexError, ExError, ExErrorKind, TextView};
use commandex_engine::{Collaborators, CommandexConfig, Workbench};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (default: ./commandex.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Refresh quiet period in milliseconds, overrides config and env
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Logging profile: development, production or test
    #[arg(long, global = true)]
    pub log_profile: Option<String>,
}

/// Defaults, file, environment, then flags
pub fn resolve_config(global: &GlobalArgs) -> Result<CommandexConfig, ExError> {
    let cwd = std::env::current_dir().map_err(|e| {
        ExError::new(ExErrorKind::Io).with_message(format!("No working directory: {}", e))
    })?;
    let mut config = CommandexConfig::load_or_default(global.config.as_deref(), &cwd)?;
    config.apply_env()?;

    if let Some(delay_ms) = global.delay_ms {
        config.refresh.delay_ms = delay_ms;
    }
    if let Some(profile) = &global.log_profile {
        config.logging.profile = profile.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &CommandexConfig) -> Result<Profile, ExError> {
    let profile = config.log_profile()?;
    logging_facility::init(profile);
    Ok(profile)
}

/// Read a JSON array of commands
pub fn load_commands(path: &Path) -> Result<CommandStore, ExError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("commands_load")
            .with_message(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let commands: Vec<Command> = serde_json::from_str(&content)
        .map_err(|e| ExError::from(CommandexError::from(e)).with_op("commands_load"))?;
    CommandStore::from_commands(commands)
        .map_err(|e| ExError::from(e).with_op("commands_load"))
}

/// Workbench over `store` with text views the caller keeps handles to
pub fn headless_workbench(
    config: &CommandexConfig,
    store: CommandStore,
) -> Result<(Workbench, TextView, TextView), ExError> {
    let explorer = TextView::new();
    let palette = TextView::new();
    let workbench = Workbench::new(
        config,
        store,
        Collaborators::headless(explorer.clone(), palette.clone()),
    )?;
    Ok((workbench, explorer, palette))
}

//! Commandex CLI
//!
//! Groups a commands file by goal the way the explorer and palette show it.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "commandex")]
#[command(about = "Commandex - commands grouped by goal", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show every registered goal with its commands
    Explore(commands::explore::ExploreArgs),
    /// Show commands matching a filter, grouped by goal
    Palette(commands::palette::PaletteArgs),
    /// Configuration operations
    Config(commands::config::ConfigArgs),
}

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore(args) => commands::explore::execute(&cli.global, args),
        Commands::Palette(args) => commands::palette::execute(&cli.global, args),
        Commands::Config(args) => commands::config::execute(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

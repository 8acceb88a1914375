//! gatelog CLI
//!
//! Toggles the gatelog define symbols across the build targets listed in a
//! settings file, then runs the configured regenerate hook.

use clap::{Parser, Subcommand};
use gatelog::{init_tracing_sink, Profile};
use std::path::PathBuf;

mod commands;
mod settings;

use commands::apply::{Edit, SymbolArgs};

#[derive(Debug, Parser)]
#[command(name = "gatelog")]
#[command(about = "gatelog - Conditional logging define symbols", long_about = None)]
struct Cli {
    /// Settings file listing build targets
    #[arg(long, global = true, default_value = settings::DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a define symbol to every supported target
    Apply(SymbolArgs),
    /// Remove a define symbol from every supported target
    Remove(SymbolArgs),
    /// Show each target's define symbols
    List,
    /// Show the cargo features implied by a target's define symbols
    Features(commands::features::FeaturesArgs),
    /// Run the regenerate hook
    Regenerate,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let factory = init_tracing_sink(Profile::Development)?;
    let logger = factory.create_logger("gatelog.cli");
    let settings = cli.settings.as_path();

    match cli.command {
        Commands::Apply(args) => commands::apply::execute(settings, args, Edit::Add, &logger),
        Commands::Remove(args) => commands::apply::execute(settings, args, Edit::Remove, &logger),
        Commands::List => commands::list::execute(settings),
        Commands::Features(args) => commands::features::execute(settings, args),
        Commands::Regenerate => commands::regenerate::execute(settings, &logger),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

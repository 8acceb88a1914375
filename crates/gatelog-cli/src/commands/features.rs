//! Features command
//!
//! Usage: gatelog features --target <NAME>

use crate::settings::Settings;
use clap::Args;
use gatelog::define_symbols;
use std::path::Path;

#[derive(Debug, Args)]
pub struct FeaturesArgs {
    /// Build target whose define symbols are translated
    #[arg(long)]
    pub target: String,
}

/// Print the cargo features implied by one target's define symbols
pub fn execute(settings_path: &Path, args: FeaturesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(settings_path)?;
    let target = settings.target(&args.target)?;
    println!(
        "{}",
        define_symbols::cargo_features(&target.define_symbols).join(",")
    );
    Ok(())
}

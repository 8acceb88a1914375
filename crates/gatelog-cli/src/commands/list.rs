//! List command
//!
//! Usage: gatelog list

use crate::settings::Settings;
use std::path::Path;

/// Print `target: symbols` for every target
pub fn execute(settings_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(settings_path)?;
    for (name, target) in &settings.targets {
        println!("{}: {}", name, target.define_symbols);
    }
    Ok(())
}

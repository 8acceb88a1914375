//! Apply and remove commands
//!
//! Usage: gatelog apply <enabled|release>
//!        gatelog remove <enabled|release>

use crate::commands::regenerate;
use crate::settings::Settings;
use clap::{Args, ValueEnum};
use gatelog::{define_symbols, log_info, log_warn, Logger};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolArg {
    /// GATELOG_ENABLED, the ordinary log macros
    Enabled,
    /// GATELOG_RELEASE, the release macro
    Release,
}

impl SymbolArg {
    pub fn define_symbol(self) -> &'static str {
        match self {
            SymbolArg::Enabled => define_symbols::ENABLE_SYMBOL,
            SymbolArg::Release => define_symbols::RELEASE_SYMBOL,
        }
    }
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Which define symbol to edit
    #[arg(value_enum)]
    pub symbol: SymbolArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Add,
    Remove,
}

/// Edit the symbol on every editable target, save, then run the hook
pub fn execute(
    settings_path: &Path,
    args: SymbolArgs,
    edit: Edit,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(settings_path)?;
    let symbol = args.symbol.define_symbol();
    let mut changed = 0;

    for (name, target) in settings.targets.iter_mut() {
        if !target.is_editable(name) {
            log_warn!(logger, "Skip {name}: not a supported build target");
            continue;
        }
        let updated = match edit {
            Edit::Add => define_symbols::add_symbol(&target.define_symbols, symbol),
            Edit::Remove => define_symbols::remove_symbol(&target.define_symbols, symbol),
        };
        match updated {
            Ok(Some(defines)) => {
                target.define_symbols = defines;
                changed += 1;
                println!("{}: {}", name, target.define_symbols);
            }
            Ok(None) => {}
            Err(err) => log_warn!(logger, "Skip {name}: {}", err),
        }
    }

    if changed > 0 {
        settings.save(settings_path)?;
    }
    log_info!(logger, "{} '{}' on {} target(s)", edit_verb(edit), symbol, changed);

    regenerate::after_edit(&settings, settings_path, logger);
    Ok(())
}

fn edit_verb(edit: Edit) -> &'static str {
    match edit {
        Edit::Add => "Applied",
        Edit::Remove => "Removed",
    }
}

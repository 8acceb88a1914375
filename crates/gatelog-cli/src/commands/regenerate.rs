//! Regenerate hook
//!
//! Usage: gatelog regenerate
//!
//! The hook is the `regenerate` command line from the settings file. It runs
//! in the settings file's directory after every `apply`/`remove`, and on
//! demand through this subcommand.

use crate::settings::Settings;
use gatelog::{log_error, log_info, log_warn, Logger};
use gatelog_errors::{GatelogError, Result};
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

/// Directory the hook runs in
pub fn working_dir(settings_path: &Path) -> &Path {
    match settings_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Run one hook command line to completion
///
/// # Errors
///
/// Returns `RegenerateFailed` when the command is empty, cannot be started
/// or exits unsuccessfully.
pub fn run_hook(command: &[String], dir: &Path) -> Result<()> {
    let display = command.join(" ");
    let (program, args) = command
        .split_first()
        .ok_or_else(|| GatelogError::RegenerateFailed {
            command: display.clone(),
            reason: "empty command".to_string(),
        })?;

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|err| GatelogError::RegenerateFailed {
            command: display.clone(),
            reason: err.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GatelogError::RegenerateFailed {
            command: display,
            reason: status.to_string(),
        })
    }
}

/// Run the hook after an edit; the edit stands whatever happens here
pub fn after_edit(settings: &Settings, settings_path: &Path, logger: &Logger) {
    let Some(command) = settings.regenerate.as_deref() else {
        log_warn!(logger, "Regenerate: no hook configured");
        return;
    };
    match run_hook(command, working_dir(settings_path)) {
        Ok(()) => log_info!(logger, "Regenerate: hook finished"),
        Err(err) => {
            let err = Arc::new(err);
            log_error!(logger, error = err.clone(), "Regenerate: {}", err);
        }
    }
}

/// Run the hook on demand
pub fn execute(
    settings_path: &Path,
    logger: &Logger,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(settings_path)?;
    let Some(command) = settings.regenerate.as_deref() else {
        log_warn!(logger, "Regenerate: no hook configured");
        return Ok(());
    };
    run_hook(command, working_dir(settings_path))?;
    log_info!(logger, "Regenerate: hook finished");
    Ok(())
}

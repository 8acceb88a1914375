//! Build-target settings file
//!
//! ```toml
//! regenerate = ["cargo", "metadata", "--format-version", "1"]
//!
//! [targets.standalone]
//! define_symbols = "FOO;GATELOG_ENABLED"
//!
//! [targets.ios]
//! define_symbols = ""
//! supported = false
//! ```

use gatelog_errors::{GatelogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Target name that is never edited
pub const UNKNOWN_TARGET: &str = "unknown";

/// Default settings file name, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "gatelog.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Command run after define symbols change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regenerate: Option<Vec<String>>,

    #[serde(default)]
    pub targets: BTreeMap<String, TargetSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSettings {
    #[serde(default)]
    pub define_symbols: String,

    #[serde(default = "default_supported")]
    pub supported: bool,
}

fn default_supported() -> bool {
    true
}

impl TargetSettings {
    /// Whether `apply`/`remove` edit this target
    pub fn is_editable(&self, name: &str) -> bool {
        self.supported && name != UNKNOWN_TARGET
    }
}

impl Settings {
    /// Read and parse a settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsIo` when the file cannot be read and `SettingsParse`
    /// when it is not valid settings TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GatelogError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|err| GatelogError::SettingsParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Write the settings back as TOML
    ///
    /// # Errors
    ///
    /// Returns `SettingsEncode` or `SettingsIo`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).map_err(|err| GatelogError::SettingsEncode {
            message: err.to_string(),
        })?;
        std::fs::write(path, text).map_err(|source| GatelogError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up one target
    ///
    /// # Errors
    ///
    /// Returns `UnknownTarget` when no target has that name.
    pub fn target(&self, name: &str) -> Result<&TargetSettings> {
        self.targets
            .get(name)
            .ok_or_else(|| GatelogError::UnknownTarget {
                target: name.to_string(),
            })
    }
}

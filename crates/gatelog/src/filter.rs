//! Per-category severity thresholds
//!
//! Directives use the same shape as `RUST_LOG`:
//!
//! ```text
//! info,physics=debug,net.socket=off
//! ```
//!
//! A bare level sets the default. `category=level` overrides it for that
//! category and its children, where a child is the category followed by `.`
//! or `::`. The longest matching override wins.

use gatelog_core_types::{Severity, Threshold};
use gatelog_errors::{GatelogError, Result};
use std::collections::BTreeMap;
use std::env::VarError;
use std::sync::{PoisonError, RwLock};

/// Environment variable read by [`CategoryThresholds::from_env`]
pub const LEVEL_ENV: &str = "GATELOG_LEVEL";

#[derive(Debug, Clone, Default)]
struct Table {
    default: Threshold,
    categories: BTreeMap<String, Threshold>,
}

/// Process-wide default threshold plus per-category overrides
#[derive(Debug, Default)]
pub struct CategoryThresholds {
    table: RwLock<Table>,
}

impl CategoryThresholds {
    /// Every category at `default`
    pub fn new(default: Threshold) -> Self {
        Self {
            table: RwLock::new(Table {
                default,
                categories: BTreeMap::new(),
            }),
        }
    }

    /// Parse a comma-separated directive list
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeverity` when the bare default level is unknown, and
    /// `InvalidDirective` when an override's level is unknown or its category
    /// is empty.
    pub fn parse(directives: &str) -> Result<Self> {
        let mut table = Table::default();
        for directive in directives.split(',').map(str::trim) {
            if directive.is_empty() {
                continue;
            }
            match directive.split_once('=') {
                None => table.default = directive.parse::<Threshold>()?,
                Some((category, level)) => {
                    let category = category.trim();
                    if category.is_empty() {
                        return Err(GatelogError::directive(directive, "empty category"));
                    }
                    table
                        .categories
                        .insert(category.to_string(), parse_level(directive, level)?);
                }
            }
        }
        Ok(Self {
            table: RwLock::new(table),
        })
    }

    /// Directives from `GATELOG_LEVEL`, or `info` when it is unset
    ///
    /// # Errors
    ///
    /// Returns the [`parse`](Self::parse) errors when the variable is set but
    /// malformed, and `InvalidDirective` when it is not valid unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(LEVEL_ENV)
    }

    /// Directives from the named environment variable
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_env_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(directives) => Self::parse(&directives),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(GatelogError::directive(
                raw.to_string_lossy(),
                format!("{} is not valid unicode", name),
            )),
        }
    }

    pub fn default_threshold(&self) -> Threshold {
        self.read(|table| table.default)
    }

    pub fn set_default(&self, threshold: Threshold) {
        self.write(|table| table.default = threshold);
    }

    pub fn set_category(&self, category: impl Into<String>, threshold: Threshold) {
        let category = category.into();
        self.write(|table| {
            table.categories.insert(category, threshold);
        });
    }

    /// Drop an override; returns the threshold it had
    pub fn remove_category(&self, category: &str) -> Option<Threshold> {
        self.write(|table| table.categories.remove(category))
    }

    /// Effective threshold for `category`
    pub fn threshold_for(&self, category: &str) -> Threshold {
        self.read(|table| {
            table
                .categories
                .iter()
                .filter(|(prefix, _)| covers(prefix, category))
                .max_by_key(|(prefix, _)| prefix.len())
                .map_or(table.default, |(_, threshold)| *threshold)
        })
    }

    pub fn allows(&self, severity: Severity, category: &str) -> bool {
        self.threshold_for(category).allows(severity)
    }

    fn read<T>(&self, f: impl FnOnce(&Table) -> T) -> T {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        f(&table)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Table) -> T) -> T {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut table)
    }
}

impl From<Threshold> for CategoryThresholds {
    fn from(default: Threshold) -> Self {
        Self::new(default)
    }
}

fn parse_level(directive: &str, level: &str) -> Result<Threshold> {
    level
        .parse::<Threshold>()
        .map_err(|err| GatelogError::directive(directive, err.to_string()))
}

fn covers(prefix: &str, category: &str) -> bool {
    match category.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with("::"),
        None => false,
    }
}

//! Build-target define strings
//!
//! A define string is a `;`-separated list of symbols, as build targets
//! store them (`"FOO;GATELOG_ENABLED"`). The two gatelog symbols map onto
//! this crate's cargo features.

use gatelog_errors::{GatelogError, Result};

/// Symbol that turns on the ordinary `log_*!` macros
pub const ENABLE_SYMBOL: &str = "GATELOG_ENABLED";

/// Symbol that turns on `log_release!`
pub const RELEASE_SYMBOL: &str = "GATELOG_RELEASE";

/// Separator between symbols
pub const SEPARATOR: char = ';';

/// Symbol-to-feature table
pub const FEATURES: [(&str, &str); 2] = [
    (ENABLE_SYMBOL, "gatelog/enabled"),
    (RELEASE_SYMBOL, "gatelog/release"),
];

/// Split a define string into its symbols, dropping blanks
pub fn parse(defines: &str) -> Vec<&str> {
    defines
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Reject symbols that would not survive a round trip through a define string
///
/// # Errors
///
/// Returns `InvalidSymbol` for an empty symbol or one containing `;` or
/// whitespace.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(GatelogError::symbol(symbol, "empty"));
    }
    if symbol.contains(SEPARATOR) {
        return Err(GatelogError::symbol(symbol, "contains ';'"));
    }
    if symbol.chars().any(char::is_whitespace) {
        return Err(GatelogError::symbol(symbol, "contains whitespace"));
    }
    Ok(())
}

pub fn contains(defines: &str, symbol: &str) -> bool {
    parse(defines).contains(&symbol)
}

/// Append `symbol` unless it is already present
///
/// Returns the new define string, or `None` when nothing changed.
///
/// # Errors
///
/// Returns `InvalidSymbol` when `symbol` fails [`validate_symbol`].
pub fn add_symbol(defines: &str, symbol: &str) -> Result<Option<String>> {
    validate_symbol(symbol)?;
    let mut symbols = parse(defines);
    if symbols.contains(&symbol) {
        return Ok(None);
    }
    symbols.push(symbol);
    Ok(Some(join(&symbols)))
}

/// Drop every exact occurrence of `symbol`
///
/// Returns the new define string, or `None` when nothing changed.
///
/// # Errors
///
/// Returns `InvalidSymbol` when `symbol` fails [`validate_symbol`].
pub fn remove_symbol(defines: &str, symbol: &str) -> Result<Option<String>> {
    validate_symbol(symbol)?;
    let symbols = parse(defines);
    let kept: Vec<&str> = symbols.iter().copied().filter(|s| *s != symbol).collect();
    if kept.len() == symbols.len() {
        return Ok(None);
    }
    Ok(Some(join(&kept)))
}

/// Cargo features of this crate implied by a define string
pub fn cargo_features(defines: &str) -> Vec<&'static str> {
    let symbols = parse(defines);
    FEATURES
        .iter()
        .filter(|(symbol, _)| symbols.contains(symbol))
        .map(|(_, feature)| *feature)
        .collect()
}

fn join(symbols: &[&str]) -> String {
    symbols.join(";")
}

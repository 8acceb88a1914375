//! Error facility for gatelog
//!
//! The logging facade itself never fails: it either hands a record to the
//! sink or does nothing. This crate covers everything around it, such as
//! threshold configuration, settings files and the define-symbol tool.
//!
//! Every error maps to an [`ErrorKind`] with a stable code suitable for
//! scripts and tests.

use gatelog_core_types::ParseSeverityError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GatelogError
pub type Result<T> = std::result::Result<T, GatelogError>;

/// Stable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Configuration
    InvalidSeverity,
    InvalidDirective,
    InvalidSymbol,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    ExternalService,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSeverity => "ERR_INVALID_SEVERITY",
            ErrorKind::InvalidDirective => "ERR_INVALID_DIRECTIVE",
            ErrorKind::InvalidSymbol => "ERR_INVALID_SYMBOL",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Error taxonomy for gatelog configuration and tooling
#[derive(Error, Debug)]
pub enum GatelogError {
    // ===== Configuration Errors =====
    /// Severity or threshold name not recognised
    #[error("Invalid severity: {value}")]
    InvalidSeverity { value: String },

    /// Threshold directive could not be parsed
    #[error("Invalid filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    /// Define symbol is empty or contains a separator
    #[error("Invalid define symbol '{symbol}': {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    /// Build target not present in the settings file
    #[error("Unknown build target: {target}")]
    UnknownTarget { target: String },

    // ===== Settings File Errors =====
    /// Settings file could not be read or written
    #[error("Settings I/O failed for {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the expected shape
    #[error("Settings file {} is malformed: {message}", .path.display())]
    SettingsParse { path: PathBuf, message: String },

    /// Settings could not be serialized back to TOML
    #[error("Settings could not be encoded: {message}")]
    SettingsEncode { message: String },

    // ===== External Hooks =====
    /// Regenerate hook could not be started or exited unsuccessfully
    #[error("Regenerate hook '{command}' failed: {reason}")]
    RegenerateFailed { command: String, reason: String },
}

impl GatelogError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatelogError::InvalidSeverity { .. } => ErrorKind::InvalidSeverity,
            GatelogError::InvalidDirective { .. } => ErrorKind::InvalidDirective,
            GatelogError::InvalidSymbol { .. } => ErrorKind::InvalidSymbol,
            GatelogError::UnknownTarget { .. } => ErrorKind::NotFound,
            GatelogError::SettingsIo { .. } => ErrorKind::Io,
            GatelogError::SettingsParse { .. } | GatelogError::SettingsEncode { .. } => {
                ErrorKind::Serialization
            }
            GatelogError::RegenerateFailed { .. } => ErrorKind::ExternalService,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Shorthand for an invalid directive
    pub fn directive(directive: impl Into<String>, reason: impl Into<String>) -> Self {
        GatelogError::InvalidDirective {
            directive: directive.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an invalid define symbol
    pub fn symbol(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        GatelogError::InvalidSymbol {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

impl From<ParseSeverityError> for GatelogError {
    fn from(err: ParseSeverityError) -> Self {
        GatelogError::InvalidSeverity {
            value: err.input().to_string(),
        }
    }
}

//! Severity levels and thresholds
//!
//! `Severity` is the level attached to every record. `Threshold` is the
//! minimum a sink is willing to accept, with an extra `Off` state that
//! rejects everything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    /// Lowercase canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a severity or threshold name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.input)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" | "information" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "critical" | "fatal" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

/// Minimum severity a sink accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Critical,
    /// Nothing passes
    Off,
}

impl Threshold {
    /// The least severe level that passes, or `None` when off
    pub fn min_severity(&self) -> Option<Severity> {
        match self {
            Threshold::Trace => Some(Severity::Trace),
            Threshold::Debug => Some(Severity::Debug),
            Threshold::Info => Some(Severity::Info),
            Threshold::Warn => Some(Severity::Warn),
            Threshold::Error => Some(Severity::Error),
            Threshold::Critical => Some(Severity::Critical),
            Threshold::Off => None,
        }
    }

    /// Whether a record of `severity` passes this threshold
    pub fn allows(&self, severity: Severity) -> bool {
        self.min_severity().is_some_and(|min| severity >= min)
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => Threshold::Trace,
            Severity::Debug => Threshold::Debug,
            Severity::Info => Threshold::Info,
            Severity::Warn => Threshold::Warn,
            Severity::Error => Threshold::Error,
            Severity::Critical => Threshold::Critical,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min_severity() {
            Some(severity) => fmt::Display::fmt(&severity, f),
            None => f.pad("off"),
        }
    }
}

impl FromStr for Threshold {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Threshold::Off),
            _ => s.parse::<Severity>().map(Threshold::from),
        }
    }
}

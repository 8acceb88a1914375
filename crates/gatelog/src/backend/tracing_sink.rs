//! Sink that forwards records to `tracing`
//!
//! Every record becomes one event with target `gatelog`. Severities map onto
//! `tracing` levels one to one, except `Critical`, which is emitted at
//! `ERROR` with `critical = true`.
//!
//! Properties travel as one `name=value` string field. A sink built with
//! [`TracingSink::without_properties`] leaves it empty and spares the
//! facade from rendering them.

use crate::filter::CategoryThresholds;
use crate::record::Record;
use crate::sink::Sink;
use gatelog_core_types::schema::TRACING_TARGET;
use gatelog_core_types::Severity;
use std::fmt::Write as _;
use tracing::Level;

/// Forwards records to the current `tracing` dispatcher
#[derive(Debug, Default)]
pub struct TracingSink {
    thresholds: CategoryThresholds,
    skip_properties: bool,
}

impl TracingSink {
    pub fn new(thresholds: CategoryThresholds) -> Self {
        Self {
            thresholds,
            skip_properties: false,
        }
    }

    /// Emit events without the `properties` field
    pub fn without_properties(mut self) -> Self {
        self.skip_properties = true;
        self
    }

    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }
}

/// `tracing` level a severity is emitted at
pub fn level_for(severity: Severity) -> Level {
    match severity {
        Severity::Trace => Level::TRACE,
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warn => Level::WARN,
        Severity::Error | Severity::Critical => Level::ERROR,
    }
}

fn level_enabled(severity: Severity) -> bool {
    match severity {
        Severity::Trace => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
        Severity::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
        Severity::Info => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
        Severity::Warn => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
        Severity::Error | Severity::Critical => {
            tracing::enabled!(target: TRACING_TARGET, Level::ERROR)
        }
    }
}

fn render_properties(record: &Record) -> String {
    let mut out = String::new();
    for property in record.properties() {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{}={}", property.name, property.value);
    }
    out
}

impl Sink for TracingSink {
    fn accepts(&self, severity: Severity, category: &str) -> bool {
        self.thresholds.allows(severity, category) && level_enabled(severity)
    }

    fn wants_properties(&self) -> bool {
        !self.skip_properties
    }

    fn write(&self, record: Record) {
        let properties = render_properties(&record);
        let exception = record.exception().map(ToString::to_string);
        let location = record.location();

        // Field names mirror gatelog_core_types::schema
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    target: TRACING_TARGET,
                    $level,
                    category = record.category(),
                    severity = record.severity().as_str(),
                    critical = record.severity() == Severity::Critical,
                    template = record.template(),
                    event_id = record.event_id().id(),
                    event_name = record.event_id().name(),
                    caller.member = location.member,
                    caller.file = location.file,
                    caller.line = location.line,
                    exception = exception.as_deref(),
                    properties = properties.as_str(),
                    "{}",
                    record.message()
                )
            };
        }

        match record.severity() {
            Severity::Trace => emit!(Level::TRACE),
            Severity::Debug => emit!(Level::DEBUG),
            Severity::Info => emit!(Level::INFO),
            Severity::Warn => emit!(Level::WARN),
            Severity::Error | Severity::Critical => emit!(Level::ERROR),
        }
    }
}

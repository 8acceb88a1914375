//! The backend seam
//!
//! A sink decides which severities it keeps per category and takes
//! ownership of finished records. Thread safety is the sink's job; the
//! facade calls it from whatever thread the log call runs on.

use crate::record::Record;
use gatelog_core_types::Severity;
use std::sync::Arc;

/// Structured-logging backend the facade forwards to
pub trait Sink: Send + Sync {
    /// Cheap check made before any formatting
    fn accepts(&self, severity: Severity, category: &str) -> bool;

    /// Take ownership of an accepted record
    fn write(&self, record: Record);

    /// Whether records should carry structured properties
    ///
    /// When `false`, arguments are formatted only into the message.
    fn wants_properties(&self) -> bool {
        true
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn accepts(&self, severity: Severity, category: &str) -> bool {
        (**self).accepts(severity, category)
    }

    fn write(&self, record: Record) {
        (**self).write(record)
    }

    fn wants_properties(&self) -> bool {
        (**self).wants_properties()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn accepts(&self, severity: Severity, category: &str) -> bool {
        (**self).accepts(severity, category)
    }

    fn write(&self, record: Record) {
        (**self).write(record)
    }

    fn wants_properties(&self) -> bool {
        (**self).wants_properties()
    }
}

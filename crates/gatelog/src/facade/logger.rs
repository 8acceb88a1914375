//! Category loggers and the call-site entry

use crate::facade::MessageBuilder;
use crate::record::{Record, SharedContext, SharedError};
use crate::sink::Sink;
use gatelog_core_types::{EventId, Severity, SourceLocation};
use std::fmt;
use std::sync::Arc;

/// Everything a call site knows before the message is rendered
pub struct Entry {
    pub(crate) severity: Severity,
    pub(crate) event_id: EventId,
    pub(crate) error: Option<SharedError>,
    pub(crate) context: Option<SharedContext>,
    pub(crate) location: SourceLocation,
}

impl Entry {
    pub fn new(severity: Severity, location: SourceLocation) -> Self {
        Self {
            severity,
            event_id: EventId::NONE,
            error: None,
            context: None,
            location,
        }
    }

    pub fn with_event_id(mut self, event_id: impl Into<EventId>) -> Self {
        self.event_id = event_id.into();
        self
    }

    /// Attach an error; the record keeps this same `Arc`
    pub fn with_error(mut self, error: SharedError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_context(mut self, context: SharedContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Named handle that sends records for one category to a sink
#[derive(Clone)]
pub struct Logger {
    category: Arc<str>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(category: impl Into<Arc<str>>, sink: Arc<dyn Sink>) -> Self {
        Self {
            category: category.into(),
            sink,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the sink would keep a record of `severity` for this category
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.sink.accepts(severity, &self.category)
    }

    /// Log one record, rendering it only if the sink accepts the severity
    ///
    /// `build` is the deferred template. It is never called when the sink's
    /// threshold excludes `entry`'s severity for this category.
    pub fn log<F>(&self, entry: Entry, build: F)
    where
        F: FnOnce(&mut MessageBuilder),
    {
        if !self.is_enabled(entry.severity) {
            return;
        }
        let mut message = MessageBuilder::with_properties(self.sink.wants_properties());
        build(&mut message);
        self.sink
            .write(Record::new(Arc::clone(&self.category), entry, message));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Produces category loggers that share one sink
#[derive(Clone)]
pub struct LoggerFactory {
    sink: Arc<dyn Sink>,
}

impl LoggerFactory {
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn from_shared(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    pub fn create_logger(&self, category: impl Into<Arc<str>>) -> Logger {
        Logger::new(category, Arc::clone(&self.sink))
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory").finish_non_exhaustive()
    }
}

//! Finished log records
//!
//! A `Record` is built exactly once per accepted call, after the sink has
//! agreed to take it and the message has been rendered. Sinks receive it by
//! value and own it from then on; it exposes read-only accessors only.

use crate::facade::{Entry, MessageBuilder};
use chrono::{DateTime, Utc};
use gatelog_core_types::{EventId, Severity, SourceLocation};
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error attached to a record, shared with the call site
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Opaque context object attached to a record
pub type SharedContext = Arc<dyn Any + Send + Sync + 'static>;

/// One interpolated argument as structured output sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Display name given at the call site, or the argument's expression text
    pub name: &'static str,
    /// The argument rendered with its default conversion
    pub value: String,
}

/// An accepted, fully rendered log record
#[derive(Clone)]
pub struct Record {
    severity: Severity,
    timestamp: DateTime<Utc>,
    category: Arc<str>,
    message: String,
    template: &'static str,
    properties: Vec<Property>,
    event_id: EventId,
    exception: Option<SharedError>,
    context: Option<SharedContext>,
    location: SourceLocation,
}

impl Record {
    /// Assemble a record from the call-site entry and the rendered message
    ///
    /// The timestamp is taken here, i.e. after the threshold check.
    pub fn new(category: Arc<str>, entry: Entry, message: MessageBuilder) -> Self {
        let (template, text, properties) = message.into_parts();
        Self {
            severity: entry.severity,
            timestamp: Utc::now(),
            category,
            message: text,
            template,
            properties,
            event_id: entry.event_id,
            exception: entry.error,
            context: entry.context,
            location: entry.location,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The rendered message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The raw format string the message was rendered from
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by its label
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// The error supplied at the call site, same allocation
    pub fn exception(&self) -> Option<&SharedError> {
        self.exception.as_ref()
    }

    pub fn context(&self) -> Option<&SharedContext> {
        self.context.as_ref()
    }

    /// Downcast the context object
    pub fn context_as<T: Any>(&self) -> Option<&T> {
        self.context.as_deref().and_then(|c| c.downcast_ref::<T>())
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("severity", &self.severity)
            .field("timestamp", &self.timestamp)
            .field("category", &self.category)
            .field("message", &self.message)
            .field("properties", &self.properties)
            .field("event_id", &self.event_id)
            .field("exception", &self.exception)
            .field("has_context", &self.context.is_some())
            .field("location", &self.location)
            .finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{:<8}|{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.severity,
            self.message,
            self.category
        )?;
        if let Some(exception) = &self.exception {
            write!(f, " {}", exception)?;
        }
        Ok(())
    }
}

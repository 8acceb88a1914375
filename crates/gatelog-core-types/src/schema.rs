//! Canonical schema constants for structured log output
//!
//! These keys are used by sinks that forward records as structured events,
//! so that every backend reports the same field names.

// Record envelope
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_TEMPLATE: &str = "template";
pub const FIELD_CRITICAL: &str = "critical";

// Event id
pub const FIELD_EVENT_ID: &str = "event_id";
pub const FIELD_EVENT_NAME: &str = "event_name";

// Caller identity
pub const FIELD_MEMBER: &str = "caller.member";
pub const FIELD_FILE: &str = "caller.file";
pub const FIELD_LINE: &str = "caller.line";

// Attachments
pub const FIELD_EXCEPTION: &str = "exception";
pub const FIELD_PROPERTIES: &str = "properties";

/// Target used for every event the tracing sink emits
pub const TRACING_TARGET: &str = "gatelog";

/// Rendering of an empty optional argument
pub const NULL_MARKER: &str = "null";

//! Core types shared across gatelog facilities
//!
//! This crate provides the foundational value types used by the facade,
//! the error facility and the define-symbol tool:
//!
//! - **Severity**: `Severity` levels and the `Threshold` filter built on them
//! - **Event ids**: `EventId` numeric id + optional label
//! - **Source location**: `SourceLocation` captured at each call site
//! - **Schema constants**: Canonical field keys for structured output

pub mod event_id;
pub mod location;
pub mod schema;
pub mod severity;

pub use event_id::EventId;
pub use location::SourceLocation;
pub use severity::{ParseSeverityError, Severity, Threshold};

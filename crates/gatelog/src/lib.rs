//! Conditional structured logging for gatelog
//!
//! This crate provides:
//! - **Facade macros** (`log_info!` and friends) that compile away without
//!   the `enabled` feature and format lazily with it
//! - **Loggers**: `LoggerFactory` hands out cheap per-category `Logger`s
//! - **Sinks**: `TracingSink` for `tracing`, `CaptureSink` for tests
//! - **Thresholds**: `CategoryThresholds` with `RUST_LOG`-style directives
//! - **Define symbols**: helpers behind the `gatelog` binary
//!
//! # Features
//!
//! - `enabled` (default): compile the ordinary `log_*!` macros
//! - `release` (default): compile `log_release!`, independently of `enabled`

pub mod backend;
pub mod define_symbols;
pub mod facade;
pub mod filter;
pub mod record;
pub mod sink;

// Re-export commonly used types
pub use backend::{
    capture_tracing, init, init_tracing_sink, CaptureSink, CapturedEvent, Profile, TracingSink,
};
pub use facade::{nullable, Entry, Logger, LoggerFactory, MessageBuilder, Nullable};
pub use filter::CategoryThresholds;
pub use gatelog_core_types::{schema, EventId, Severity, SourceLocation, Threshold};
pub use gatelog_errors::{ErrorKind, GatelogError, Result};
pub use record::{Property, Record, SharedContext, SharedError};
pub use sink::Sink;

/// Whether this build compiles the ordinary `log_*!` macros
pub const ENABLED: bool = cfg!(feature = "enabled");

/// Whether this build compiles `log_release!`
pub const RELEASE_ENABLED: bool = cfg!(feature = "release");

#[doc(hidden)]
pub mod __private {
    pub use crate::facade::arguments::{
        AdaptOption, AdaptPlain, DebugProperty, DisplayProperty, OpaqueProperty, Probe, Rendered,
    };
    pub use gatelog_core_types::location::trim_member_path;
}

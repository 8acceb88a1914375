//! Conditional log facade
//!
//! The facade is the call surface application code uses:
//!
//! - `log_trace!`, `log_debug!`, `log_info!`, `log_warn!`, `log_error!`,
//!   `log_critical!`: one macro per severity
//! - `log_at!(logger, severity, ...)`: explicit severity
//! - `log_release!(logger, severity, ...)`: the release path
//!
//! Without the `enabled` feature the ordinary macros expand to dead code
//! whose arguments are never evaluated. `log_release!` follows the separate
//! `release` feature. With the feature present, a call first asks the sink
//! whether it would keep a record of that severity for the logger's
//! category, and only then renders the message.
//!
//! # Usage
//!
//! ```
//! use gatelog::{log_info, log_warn, CaptureSink, LoggerFactory, Threshold};
//!
//! let capture = CaptureSink::new(Threshold::Debug);
//! let logger = LoggerFactory::new(capture.clone()).create_logger("MyCategory");
//!
//! let frame = 5;
//! let count = 3;
//! log_info!(logger, "Start! Frame: {frame}");
//! log_warn!(logger, "Something: {hp}", hp = count);
//!
//! assert_eq!(capture.records().len(), if gatelog::ENABLED { 2 } else { 0 });
//! ```

pub mod arguments;
pub mod logger;
pub mod macros;
pub mod message;

pub use arguments::{nullable, Nullable};
pub use logger::{Entry, Logger, LoggerFactory};
pub use message::MessageBuilder;

//! Sinks and subscriber setup
//!
//! - **TracingSink**: forwards records to `tracing` events
//! - **CaptureSink**: keeps records in memory for assertions
//! - **init**: one-time subscriber installation per [`Profile`]
//! - **tracing_capture**: scoped capture of the `tracing` events a sink emits

pub mod capture;
pub mod init;
pub mod tracing_capture;
pub mod tracing_sink;

pub use capture::CaptureSink;
pub use init::{init, init_tracing_sink, Profile};
pub use tracing_capture::{capture_tracing, CapturedEvent};
pub use tracing_sink::TracingSink;

//! Subscriber initialization
//!
//! Provides a single initialization point for the `tracing` backend.

use crate::backend::TracingSink;
use crate::facade::LoggerFactory;
use crate::filter::CategoryThresholds;
use gatelog_errors::Result;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No output; tests install their own subscriber or sink
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has any effect.
///
/// # Profiles
///
/// - **Development**: Human-readable output, `RUST_LOG` or `gatelog=debug`
/// - **Production**: JSON output, `RUST_LOG` or `gatelog=info`
/// - **Test**: Bare registry
///
/// Development and Production write to stderr.
///
/// # Example
///
/// ```
/// use gatelog::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // try_init: a host application may already own the global subscriber
        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("gatelog=debug")),
                    )
                    .try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("gatelog=info")),
                    )
                    .try_init();
            }
            Profile::Test => {
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}

/// Initialize `profile` and return a factory whose loggers write to `tracing`
///
/// Category thresholds come from `GATELOG_LEVEL`.
///
/// # Errors
///
/// Returns `InvalidSeverity` or `InvalidDirective` when `GATELOG_LEVEL` is malformed.
pub fn init_tracing_sink(profile: Profile) -> Result<LoggerFactory> {
    init(profile);
    let thresholds = CategoryThresholds::from_env()?;
    Ok(LoggerFactory::new(TracingSink::new(thresholds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}

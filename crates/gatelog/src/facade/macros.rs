//! Facade macros
//!
//! Call shape, for every macro:
//!
//! ```text
//! log_info!(logger, [event = ..,] [error = ..,] [context = ..,] "format", args..)
//! log_at!(logger, severity, [event = ..,] [error = ..,] [context = ..,] "format", args..)
//! log_release!(logger, severity, [event = ..,] [error = ..,] [context = ..,] "format", args..)
//! ```
//!
//! Arguments follow `format_args!`: positional (`"{}", hp`), named
//! (`"{hp}", hp = player.hp`) or captured inline (`"{frame}"`). Positional
//! and named arguments also become structured properties, labeled with the
//! given name or else the argument's expression text. Inline captures are
//! resolved inside the format string, which a macro cannot look into, so
//! they render into the message but add no property. Write
//! `"{frame}", frame = frame` when the property matters.
//!
//! Each argument is evaluated once. A plain `{}` placeholder also formats it
//! once; the property reuses that text. Properties are skipped entirely for
//! sinks whose [`Sink::wants_properties`](crate::Sink::wants_properties)
//! returns `false`.
//!
//! Whether `log_at!` and `log_release!` emit anything is decided by the
//! features `gatelog` itself was built with, not by the calling crate.

/// Caller identity for the enclosing function
#[doc(hidden)]
#[macro_export]
macro_rules! __source_location {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::SourceLocation::new(
            $crate::__private::trim_member_path(__type_name_of(__here)),
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
        )
    }};
}

/// Binds each argument once, then renders the message and its properties
#[doc(hidden)]
#[macro_export]
macro_rules! __log_args {
    ($message:ident, $fmt:literal, [$($fmt_args:tt)*] [$(($label:expr, $bound:ident))*]) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DebugProperty as _, DisplayProperty as _, OpaqueProperty as _};
        $message.set_template($fmt);
        $message.render(::core::format_args!($fmt, $($fmt_args)*));
        $(
            if $message.wants_properties() {
                let __value = match $bound.plain() {
                    ::core::option::Option::Some(__text) => __text.to_owned(),
                    ::core::option::Option::None => {
                        (&&&$crate::__private::Probe($bound.value())).to_property()
                    }
                };
                $message.push_property($label, __value);
            }
        )*
    }};
    ($message:ident, $fmt:literal, [$($fmt_args:tt)*] [$($props:tt)*] $name:ident = $value:expr $(, $($rest:tt)*)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{AdaptOption as _, AdaptPlain as _};
        match $crate::__private::Rendered::new(
            (&&$crate::__private::Probe(&$value)).adapt(),
            $message.wants_properties(),
        ) {
            __arg => $crate::__log_args!(
                $message,
                $fmt,
                [$($fmt_args)* $name = __arg,]
                [$($props)* (::core::stringify!($name), __arg)]
                $($($rest)*)?
            ),
        }
    }};
    ($message:ident, $fmt:literal, [$($fmt_args:tt)*] [$($props:tt)*] $value:expr $(, $($rest:tt)*)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{AdaptOption as _, AdaptPlain as _};
        match $crate::__private::Rendered::new(
            (&&$crate::__private::Probe(&$value)).adapt(),
            $message.wants_properties(),
        ) {
            __arg => $crate::__log_args!(
                $message,
                $fmt,
                [$($fmt_args)* __arg,]
                [$($props)* (::core::stringify!($value), __arg)]
                $($($rest)*)?
            ),
        }
    }};
}

/// The live expansion shared by every facade macro
#[doc(hidden)]
#[macro_export]
macro_rules! __log_emit {
    (
        $logger:expr, $severity:expr,
        $(event = $event:expr,)?
        $(error = $error:expr,)?
        $(context = $context:expr,)?
        $fmt:literal $(, $($args:tt)*)?
    ) => {{
        #[allow(unused_mut)]
        let mut __entry = $crate::Entry::new($severity, $crate::__source_location!());
        $( __entry = __entry.with_event_id($event); )?
        $( __entry = __entry.with_error($error); )?
        $( __entry = __entry.with_context($context); )?
        $logger.log(__entry, |__message: &mut $crate::MessageBuilder| {
            $crate::__log_args!(__message, $fmt, [] [] $($($args)*)?)
        });
    }};
}

/// The expansion used when a call is compiled out
///
/// The call still type-checks, but sits behind `if false` so no argument is
/// evaluated and the optimizer drops it.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_elided {
    ($($tokens:tt)+) => {
        if false {
            $crate::__log_emit!($($tokens)+);
        }
    };
}

/// Log at an explicit severity. Compiled only with the `enabled` feature.
///
/// # Example
///
/// ```
/// # use gatelog::{log_at, CaptureSink, LoggerFactory, Severity, Threshold};
/// # let logger = LoggerFactory::new(CaptureSink::new(Threshold::Trace)).create_logger("Net");
/// let event_name = "connect";
/// log_at!(logger, Severity::Warn, "Event: {event_name}");
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($rest:tt)+) => {
        $crate::__log_emit!($logger, $severity, $($rest)+)
    };
}

/// Log at an explicit severity. Compiled only with the `enabled` feature.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($rest:tt)+) => {
        $crate::__log_elided!($logger, $severity, $($rest)+)
    };
}

/// Log at an explicit severity through the release path. Compiled only with
/// the `release` feature, independently of `enabled`.
///
/// # Example
///
/// ```
/// # use gatelog::{log_release, CaptureSink, LoggerFactory, Severity, Threshold};
/// # let logger = LoggerFactory::new(CaptureSink::new(Threshold::Trace)).create_logger("Client");
/// let build = "1.4.2";
/// log_release!(logger, Severity::Info, "Release-only message: {build}");
/// ```
#[cfg(feature = "release")]
#[macro_export]
macro_rules! log_release {
    ($logger:expr, $severity:expr, $($rest:tt)+) => {
        $crate::__log_emit!($logger, $severity, $($rest)+)
    };
}

/// Log at an explicit severity through the release path. Compiled only with
/// the `release` feature, independently of `enabled`.
#[cfg(not(feature = "release"))]
#[macro_export]
macro_rules! log_release {
    ($logger:expr, $severity:expr, $($rest:tt)+) => {
        $crate::__log_elided!($logger, $severity, $($rest)+)
    };
}

/// Log at trace severity
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Trace, $($rest)+)
    };
}

/// Log at debug severity
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

/// Log at info severity
///
/// # Example
///
/// ```
/// # use gatelog::{log_info, CaptureSink, LoggerFactory, Threshold};
/// # let logger = LoggerFactory::new(CaptureSink::new(Threshold::Trace)).create_logger("Game");
/// let user_id = 42;
/// log_info!(logger, "User {user_id} logged in");
/// log_info!(logger, event = 1001, "User {} logged out", user_id);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// Log at warn severity
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warn, $($rest)+)
    };
}

/// Log at error severity
///
/// # Example
///
/// ```
/// # use gatelog::{log_error, CaptureSink, LoggerFactory, Threshold};
/// # use std::sync::Arc;
/// # let logger = LoggerFactory::new(CaptureSink::new(Threshold::Trace)).create_logger("Save");
/// let err = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
/// log_error!(logger, error = err.clone(), "Failed: {}", err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($rest)+)
    };
}

/// Log at critical severity
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Critical, $($rest)+)
    };
}

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![cfg(feature = "enabled")]

use gatelog::{
    log_at, log_critical, log_debug, log_error, log_info, log_trace, log_warn, CaptureSink,
    EventId, Logger, LoggerFactory, Record, Severity, SharedError, Sink, Threshold,
};
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

fn capture_logger(threshold: Threshold, category: &str) -> (CaptureSink, Logger) {
    let capture = CaptureSink::new(threshold);
    let logger = LoggerFactory::new(capture.clone()).create_logger(category);
    (capture, logger)
}

#[test]
fn test_each_severity_macro_produces_one_record() {
    let (capture, logger) = capture_logger(Threshold::Trace, "severities");

    log_trace!(logger, "trace");
    log_debug!(logger, "debug");
    log_info!(logger, "info");
    log_warn!(logger, "warn");
    log_error!(logger, "error");
    log_critical!(logger, "critical");

    let severities: Vec<_> = capture.records().iter().map(|r| r.severity()).collect();
    assert_eq!(severities, Severity::ALL.to_vec());
}

#[test]
fn test_log_at_uses_given_severity() {
    let (capture, logger) = capture_logger(Threshold::Trace, "explicit");

    for severity in Severity::ALL {
        log_at!(logger, severity, "at {}", severity);
    }

    let records = capture.records();
    assert_eq!(records.len(), Severity::ALL.len());
    for (record, severity) in records.iter().zip(Severity::ALL) {
        assert_eq!(record.severity(), severity);
        assert_eq!(record.message(), format!("at {}", severity));
    }
}

#[test]
fn test_filtered_call_never_evaluates_arguments() {
    let (capture, logger) = capture_logger(Threshold::Info, "probe");
    let calls = Cell::new(0);
    let probe = || {
        calls.set(calls.get() + 1);
        calls.get()
    };

    log_debug!(logger, "value {}", probe());
    log_trace!(logger, "value {v}", v = probe());

    assert_eq!(calls.get(), 0);
    assert!(capture.records().is_empty());

    log_info!(logger, "value {}", probe());
    assert_eq!(calls.get(), 1);
    assert_eq!(capture.records()[0].message(), "value 1");
}

#[test]
fn test_category_override_applies() {
    let (capture, logger) = capture_logger(Threshold::Warn, "physics.solver");
    capture.thresholds().set_category("physics", Threshold::Debug);

    log_debug!(logger, "kept");
    log_trace!(logger, "dropped");

    assert_eq!(capture.records().len(), 1);
    capture.assert_record_exists(Severity::Debug, "kept");
}

#[test]
fn test_event_id_supplied_and_default() {
    let (capture, logger) = capture_logger(Threshold::Trace, "auth");
    let user_id = 42;

    log_info!(logger, event = EventId::new(1001, "login"), "User {} logged in", user_id);
    log_info!(logger, event = 7, "numeric only");
    log_info!(logger, "no event");

    let records = capture.records();
    assert_eq!(records[0].event_id().id(), 1001);
    assert_eq!(records[0].event_id().name(), Some("login"));
    assert_eq!(records[1].event_id(), &EventId::from_id(7));
    assert!(records[2].event_id().is_none());
}

#[test]
fn test_exception_is_the_same_arc() {
    let (capture, logger) = capture_logger(Threshold::Trace, "save");
    let err: SharedError = Arc::new(std::io::Error::other("disk full"));

    log_error!(logger, error = err.clone(), "Failed to save: {}", err);

    let records = capture.records();
    let exception = records[0].exception().expect("exception attached");
    assert!(Arc::ptr_eq(exception, &err));
    assert_eq!(records[0].message(), "Failed to save: disk full");
}

#[test]
fn test_all_optional_parts_together() {
    #[derive(Debug, PartialEq)]
    struct Scene {
        name: &'static str,
    }

    let (capture, logger) = capture_logger(Threshold::Trace, "scene");
    let err: SharedError = Arc::new(std::io::Error::other("asset missing"));
    let scene = Arc::new(Scene { name: "Level1" });

    log_at!(
        logger,
        Severity::Warn,
        event = 12,
        error = err.clone(),
        context = scene.clone(),
        "Loading {}",
        scene.name
    );

    let records = capture.records();
    let record = &records[0];
    assert_eq!(record.severity(), Severity::Warn);
    assert_eq!(record.event_id().id(), 12);
    assert!(record.exception().is_some());
    assert_eq!(record.context_as::<Scene>(), Some(&Scene { name: "Level1" }));
    assert_eq!(record.message(), "Loading Level1");
}

#[test]
fn test_property_labels() {
    struct Player {
        hp: u32,
    }

    let (capture, logger) = capture_logger(Threshold::Trace, "labels");
    let player = Player { hp: 3 };

    log_warn!(logger, "Something: {hp}", hp = player.hp);
    log_info!(logger, "pos {} {}", player.hp, 1 + 1);

    let records = capture.records();
    assert_eq!(records[0].message(), "Something: 3");
    assert_eq!(records[0].property("hp"), Some("3"));
    assert_eq!(records[0].template(), "Something: {hp}");

    let names: Vec<_> = records[1].properties().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["player.hp", "1 + 1"]);
    assert_eq!(records[1].property("1 + 1"), Some("2"));
}

#[test]
fn test_frame_scenario() {
    let (capture, logger) = capture_logger(Threshold::Debug, "MyCategory");
    let frame = 5;

    log_info!(logger, "Start! Frame: {frame}");
    log_trace!(logger, "x");

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity(), Severity::Info);
    assert!(records[0].message().contains('5'));
    assert_eq!(records[0].category(), "MyCategory");
    // Inline captures render but are not labeled
    assert!(records[0].properties().is_empty());
}

#[test]
fn test_format_specs_are_honored() {
    let (capture, logger) = capture_logger(Threshold::Trace, "format");

    log_info!(logger, "[{:>8.2}] {:x} {:?}", 2.5_f64, 255_u8, "hp");

    assert_eq!(capture.records()[0].message(), "[    2.50] ff \"hp\"");
}

#[test]
fn test_optional_arguments_render_null() {
    let (capture, logger) = capture_logger(Threshold::Trace, "nullable");
    let target: Option<&str> = None;
    let hp: Option<u32> = Some(7);
    let path: Option<Vec<u8>> = Some(vec![1]);

    log_info!(logger, "Target: {} hp={:>3}", target, hp);
    log_info!(logger, "Path: {:?}", path);

    let records = capture.records();
    assert_eq!(records[0].message(), "Target: null hp=  7");
    assert_eq!(records[0].property("target"), Some("null"));
    assert_eq!(records[1].message(), "Path: Some([1])");
}

#[test]
fn test_caller_identity() {
    let (capture, logger) = capture_logger(Threshold::Trace, "caller");

    let line = line!() + 1;
    log_info!(logger, "here");
    let in_closure = || log_info!(logger, "closure");
    in_closure();

    let records = capture.records();
    let location = records[0].location();
    assert_eq!(location.member_name(), "test_caller_identity");
    assert!(location.member.ends_with("::test_caller_identity"));
    assert!(location.file.ends_with("facade_tests.rs"));
    assert_eq!(location.line, line);
    assert_eq!(records[1].location().member, location.member);
}

#[test]
fn test_loggers_are_shared_across_threads() {
    let (capture, logger) = capture_logger(Threshold::Trace, "threads");

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let logger = logger.clone();
            scope.spawn(move || {
                for i in 0..10 {
                    log_debug!(logger, "worker {} step {}", worker, i);
                }
            });
        }
    });

    assert_eq!(capture.records().len(), 40);
}

struct Counted<'a>(&'a Cell<u32>);

impl fmt::Display for Counted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.set(self.0.get() + 1);
        f.pad("hp")
    }
}

#[test]
fn test_argument_display_runs_once_per_call() {
    let (capture, logger) = capture_logger(Threshold::Trace, "counting");
    let calls = Cell::new(0);

    log_info!(logger, "value {}", Counted(&calls));
    assert_eq!(calls.get(), 1);

    log_info!(logger, "named {stat}", stat = Counted(&calls));
    assert_eq!(calls.get(), 2);

    let records = capture.records();
    assert_eq!(records[0].message(), "value hp");
    assert_eq!(records[0].properties()[0].value, "hp");
    assert_eq!(records[1].property("stat"), Some("hp"));
}

#[test]
fn test_sink_without_properties_formats_once() {
    let capture = CaptureSink::new(Threshold::Trace).without_properties();
    let logger = LoggerFactory::new(capture.clone()).create_logger("lean");
    let calls = Cell::new(0);

    log_warn!(logger, "[{:>4}] [{}]", Counted(&calls), Counted(&calls));

    assert_eq!(calls.get(), 2);
    let records = capture.records();
    assert_eq!(records[0].message(), "[  hp] [hp]");
    assert!(records[0].properties().is_empty());
}

struct Reenter<'a>(&'a Logger);

impl fmt::Display for Reenter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        log_info!(self.0, "inner");
        f.write_str("outer-arg")
    }
}

#[test]
fn test_reentrant_display_logs_once() {
    let (capture, logger) = capture_logger(Threshold::Trace, "reenter");

    log_info!(logger, "{}", Reenter(&logger));

    let messages: Vec<_> = capture
        .records()
        .iter()
        .map(|r| r.message().to_string())
        .collect();
    assert_eq!(messages, vec!["inner", "outer-arg"]);
}

struct FailingSink;

impl Sink for FailingSink {
    fn accepts(&self, _severity: Severity, _category: &str) -> bool {
        true
    }

    fn write(&self, _record: Record) {
        panic!("sink failed to write");
    }
}

#[test]
#[should_panic(expected = "sink failed to write")]
fn test_sink_panic_propagates() {
    let logger = LoggerFactory::new(FailingSink).create_logger("broken");
    log_error!(logger, "lost");
}

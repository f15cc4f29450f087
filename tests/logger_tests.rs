//! Tests for the output router and logger
//!
//! These tests verify:
//! - Enablement rules for standard and verbose levels
//! - stdout / stderr destination selection
//! - Mirroring into the rotating file writer
//! - Independent fan-out and error reporting
//! - Unsupported capability extensions fail fast

use std::fs;
use std::sync::Arc;

use sblog::{
    attrs, Level, LineSink, LogError, Logger, LoggerOptions, MemorySink, OutputRouter, Style,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct Capture {
    stdout: Arc<MemorySink>,
    stderr: Arc<MemorySink>,
}

fn logger_with(options: LoggerOptions) -> (Logger, Capture) {
    let capture = Capture {
        stdout: Arc::new(MemorySink::new()),
        stderr: Arc::new(MemorySink::new()),
    };
    let logger = Logger::with_sinks(options, capture.stdout.clone(), capture.stderr.clone())
        .unwrap();
    (logger, capture)
}

fn plain_options() -> sblog::config::LoggerOptionsBuilder {
    LoggerOptions::builder()
        .time_format("TS")
        .console_style(Style::Plain)
        .file_style(Style::Plain)
}

/// Sink that rejects every line
struct BrokenSink;

impl LineSink for BrokenSink {
    fn write_line(&self, _line: &[u8]) -> sblog::Result<()> {
        Err(LogError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        )))
    }
}

// =============================================================================
// Enablement Tests
// =============================================================================

#[test]
fn test_standard_levels_always_enabled() {
    for max in [0, 1, 5, 100] {
        let (logger, _) = logger_with(plain_options().current_verbosity_level(max).build());
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG] {
            assert!(logger.enabled(level), "level {} at max {}", level, max);
        }
    }
}

#[test]
fn test_verbose_enabled_up_to_max() {
    for max in [0u32, 1, 2, 10] {
        let (logger, _) = logger_with(plain_options().current_verbosity_level(max).build());
        for v in 0..=12u32 {
            assert_eq!(logger.enabled(Level::verbose(v)), v <= max, "v={} max={}", v, max);
        }
    }
}

#[test]
fn test_off_scale_levels_never_enabled() {
    let (logger, _) = logger_with(plain_options().current_verbosity_level(3).build());
    assert!(!logger.enabled(Level::from_raw(2)));
    assert!(!logger.enabled(Level::from_raw(-1)));
    assert!(!logger.enabled(Level::from_raw(12)));
}

#[test]
fn test_verbose_output_respects_max() {
    let (logger, capture) = logger_with(plain_options().current_verbosity_level(2).build());

    for v in 0..=3 {
        logger
            .log(Level::verbose(v), &format!("level {}", v), &[])
            .unwrap();
    }

    assert_eq!(
        capture.stdout.lines(),
        vec![
            "[DEBUG] (TS) level 0",
            "[VERBOS][lvl 1/2] (TS) level 1",
            "[VERBOS][lvl 2/2] (TS) level 2",
        ]
    );
}

// =============================================================================
// Destination Tests
// =============================================================================

#[test]
fn test_error_goes_to_stderr_only() {
    let (logger, capture) = logger_with(plain_options().build());

    logger.error("bad", &[]).unwrap();

    assert_eq!(capture.stderr.contents(), "[ERROR] (TS) bad\n");
    assert_eq!(capture.stdout.contents(), "");
}

#[test]
fn test_other_levels_go_to_stdout() {
    let (logger, capture) = logger_with(plain_options().current_verbosity_level(1).build());

    logger.warn("w", &[]).unwrap();
    logger.info("i", &[]).unwrap();
    logger.debug("d", &[]).unwrap();
    logger.log(Level::verbose(1), "v", &[]).unwrap();

    assert_eq!(capture.stdout.lines().len(), 4);
    assert_eq!(capture.stderr.contents(), "");
}

#[test]
fn test_attrs_pass_through() {
    let (logger, capture) = logger_with(plain_options().build());

    logger.info("served", &attrs!["status" => 200]).unwrap();

    assert_eq!(capture.stdout.contents(), "[INFO] (TS) served status=200\n");
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_file_receives_identical_copy() {
    let temp = TempDir::new().unwrap();
    let (logger, capture) = logger_with(
        LoggerOptions::builder()
            .time_format("TS")
            .current_verbosity_level(1)
            .log_directory(temp.path())
            .log_name_prefix("persist")
            .build(),
    );

    logger.info("saved", &[]).unwrap();
    logger.warn("saved", &[]).unwrap();
    logger.error("saved", &[]).unwrap();
    logger.debug("saved", &[]).unwrap();
    logger.log(Level::verbose(1), "saved", &[]).unwrap();
    logger.log(Level::verbose(2), "dropped", &[]).unwrap();

    let file = fs::read_to_string(temp.path().join("persist.0.log")).unwrap();
    let console = format!("{}{}", capture.stdout.contents(), capture.stderr.contents());

    assert_eq!(file.lines().count(), 5);
    assert!(!file.contains("dropped"));
    for line in console.lines() {
        assert!(file.contains(line));
    }
}

#[test]
fn test_plain_file_style() {
    let temp = TempDir::new().unwrap();
    let (logger, capture) = logger_with(
        LoggerOptions::builder()
            .log_directory(temp.path())
            .file_style(Style::Plain)
            .build(),
    );

    logger.info("styled", &attrs!["k" => "v"]).unwrap();

    let file = fs::read_to_string(temp.path().join("sblog.0.log")).unwrap();
    assert!(capture.stdout.contents().contains('\u{1b}'));
    assert!(!file.contains('\u{1b}'));
    assert!(file.ends_with(") styled k=v\n"));
}

#[test]
fn test_logger_rotate() {
    let temp = TempDir::new().unwrap();
    let (logger, _) = logger_with(
        plain_options()
            .log_directory(temp.path())
            .max_file_count(2)
            .build(),
    );

    logger.info("one", &[]).unwrap();
    logger.rotate().unwrap();
    logger.info("two", &[]).unwrap();

    let first = fs::read_to_string(temp.path().join("sblog.0.log")).unwrap();
    let second = fs::read_to_string(temp.path().join("sblog.1.log")).unwrap();
    assert_eq!(first, "[INFO] (TS) one\n");
    assert_eq!(second, "[INFO] (TS) two\n");
}

#[test]
fn test_size_rotation_through_logger() {
    let temp = TempDir::new().unwrap();
    let (logger, _) = logger_with(
        plain_options()
            .log_directory(temp.path())
            .max_file_count(3)
            .max_file_size_bytes(40)
            .build(),
    );

    // Each line is 29 bytes: the second crosses 40
    logger.info("message number 1", &[]).unwrap();
    logger.info("message number 2", &[]).unwrap();
    logger.info("message number 3", &[]).unwrap();

    let writer = logger.file_writer().unwrap();
    assert_eq!(writer.current_index(), 1);
    let second = fs::read_to_string(temp.path().join("sblog.1.log")).unwrap();
    assert_eq!(second, "[INFO] (TS) message number 3\n");
}

#[test]
fn test_rotate_without_persistence() {
    let (logger, _) = logger_with(plain_options().build());
    assert!(matches!(logger.rotate(), Err(LogError::Config(_))));
    assert!(logger.close().is_ok());
}

#[test]
fn test_logging_after_close() {
    let temp = TempDir::new().unwrap();
    let (logger, capture) = logger_with(plain_options().log_directory(temp.path()).build());

    logger.close().unwrap();
    let result = logger.info("still printed", &[]);

    assert!(matches!(result, Err(LogError::WriterClosed)));
    assert_eq!(capture.stdout.contents(), "[INFO] (TS) still printed\n");
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let result = Logger::new(
        LoggerOptions::builder()
            .log_directory(temp.path().join("missing"))
            .build(),
    );
    assert!(matches!(result, Err(LogError::DirectoryLookup { .. })));
}

#[test]
fn test_invalid_time_format_fails() {
    let result = Logger::new(LoggerOptions::builder().time_format("%Q").build());
    assert!(matches!(result, Err(LogError::Config(_))));
}

// =============================================================================
// Fan-out Failure Tests
// =============================================================================

#[test]
fn test_console_failure_does_not_block_file() {
    let temp = TempDir::new().unwrap();
    let options = plain_options().log_directory(temp.path()).build();
    let logger = Logger::with_sinks(options, Arc::new(BrokenSink), Arc::new(BrokenSink)).unwrap();

    let result = logger.warn("reaches disk", &[]);

    assert!(matches!(result, Err(LogError::Io(_))));
    let file = fs::read_to_string(temp.path().join("sblog.0.log")).unwrap();
    assert_eq!(file, "[WARN] (TS) reaches disk\n");
}

#[test]
fn test_router_without_file() {
    let stdout = Arc::new(MemorySink::new());
    let router = OutputRouter::new(
        &plain_options().build(),
        stdout.clone(),
        Arc::new(BrokenSink),
        None,
    );

    assert!(router.file_writer().is_none());
    let record = sblog::Record::new(Level::INFO, "routed", Vec::new());
    router.route(&record).unwrap();
    assert_eq!(stdout.contents(), "[INFO] (TS) routed\n");

    let record = sblog::Record::new(Level::ERROR, "lost", Vec::new());
    assert!(router.route(&record).is_err());
}

// =============================================================================
// Capability Extension Tests
// =============================================================================

#[test]
#[should_panic(expected = "with_attrs is unsupported")]
fn test_with_attrs_panics() {
    let (logger, _) = logger_with(plain_options().build());
    let _ = logger.with_attrs(&attrs!["k" => 1]);
}

#[test]
#[should_panic(expected = "with_group is unsupported")]
fn test_with_group_panics() {
    let (logger, _) = logger_with(plain_options().build());
    let _ = logger.with_group("request");
}

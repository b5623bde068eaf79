//! Integration tests for the console logger
//!
//! These tests verify:
//! - Level gating across every level pair
//! - One-shot and builder output equivalence
//! - Caller placement and call-site accuracy
//! - Segment toggles
//! - File sinks

use rust_console_logger::prelude::*;
use rust_console_logger::{args, Level};
use std::fs;
use tempfile::TempDir;

fn plain_logger(sink: &MemorySink) -> Logger {
    Logger::builder()
        .min_level(Level::Trace)
        .colors(false)
        .writer(sink.clone())
        .build()
}

#[test]
fn test_example_scenario() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);

    logger.info("deploy complete", &args!["service", "api", "duration_ms", 120]);

    assert_eq!(
        sink.contents(),
        "• deploy complete\n  ├─ service: api\n  └─ duration_ms: 120\n"
    );
}

#[test]
fn test_level_gating_matrix() {
    for min in Level::ALL {
        for level in Level::ALL {
            if level == Level::Fatal {
                continue;
            }
            let sink = MemorySink::new();
            let logger = plain_logger(&sink);
            logger.set_level(min);

            logger.log(level, "gate check", &[]);

            let expected = level >= min || level == Level::Print;
            assert_eq!(
                !sink.is_empty(),
                expected,
                "level {} with minimum {}",
                level,
                min
            );
        }
    }
}

#[test]
fn test_every_level_renders_its_icon() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);

    logger.trace("t", &[]);
    logger.debug("d", &[]);
    logger.notice("n", &[]);
    logger.info("i", &[]);
    logger.warn("w", &[]);
    logger.ok("o", &[]);
    logger.success("s", &[]);
    logger.error("e", &[]);
    logger.print("p", &[]);

    assert_eq!(sink.contents(), "• t\n• d\n• n\n• i\n⚠ w\n✔ o\n✔ s\n✖ e\np\n");
}

#[test]
fn test_level_labels_are_padded() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);
    logger.with_level_text(true);

    logger.success("saved", &[]);
    logger.ok("fine", &[]);

    assert_eq!(sink.contents(), "SUCCESS ∣ ✔ saved\nOK      ∣ ✔ fine\n");
}

#[test]
fn test_unpaired_trailing_argument() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);

    logger.print("hello world!", &args!["a", "1", "b"]);

    assert_eq!(sink.contents(), "hello world!\n  ├─ a: 1\n  └─ b\n");
}

#[test]
fn test_duplicate_keys_in_one_shot_call() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);

    logger.notice("m", &args!["x", 1, "y", 2, "x", 3]);

    assert_eq!(sink.contents(), "• m\n  ├─ x: 3\n  └─ y: 2\n");
}

#[test]
fn test_one_shot_and_entry_are_identical() {
    let one_shot = MemorySink::new();
    let chained = MemorySink::new();
    let one_shot_logger = plain_logger(&one_shot);
    let chained_logger = plain_logger(&chained);
    one_shot_logger.with_level_text(true);
    chained_logger.with_level_text(true);

    one_shot_logger.info("request", &args!["method", "GET", "status", 200, "cached", false]);
    chained_logger
        .info_entry()
        .field("method", "GET")
        .field("status", 200)
        .field("cached", false)
        .msg("request");

    assert_eq!(one_shot.contents(), chained.contents());
    assert!(one_shot.contents().starts_with("INFO    ∣ • request\n"));
}

#[test]
fn test_caller_is_always_last() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);
    logger.with_caller(true);

    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline exceeded");
    logger
        .warn_entry()
        .field("first", 1)
        .err(&io_err)
        .field("second", 2)
        .field("third", 3)
        .msg("slow upstream");

    let contents = sink.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "  ├─ first: 1");
    assert_eq!(lines[3], "  ├─ third: 3");
    assert_eq!(lines[4], "  ├─ err: deadline exceeded");
    assert!(lines[5].starts_with("  └─ caller: "), "got {:?}", lines[5]);
}

#[track_caller]
fn log_through_helper(logger: &Logger) {
    logger.info("from helper", &[]);
}

#[test]
fn test_caller_resolves_to_call_site() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);
    logger.with_caller(true);
    let file = file!().replace('\\', "/");

    let direct_line = line!() + 1;
    logger.info("direct", &[]);
    let entry_line = line!() + 1;
    logger.info_entry().msg("entry");
    let helper_line = line!() + 1;
    log_through_helper(&logger);
    let macro_line = line!() + 1;
    rust_console_logger::info!(logger, "macro");

    let contents = sink.contents();
    for line in [direct_line, entry_line, helper_line, macro_line] {
        let expected = format!("  └─ caller: {}:{}", file, line);
        assert!(
            contents.lines().any(|l| l == expected),
            "missing {:?} in {:?}",
            expected,
            contents
        );
    }
}

#[test]
fn test_timestamp_toggle_removes_only_timestamp() {
    let with_stamp = MemorySink::new();
    let without_stamp = MemorySink::new();

    let on = plain_logger(&with_stamp);
    on.with_timestamp(true).with_level_text(true).set_timestamp_format("FIXED");
    let off = plain_logger(&without_stamp);
    off.with_timestamp(false).with_level_text(true).set_timestamp_format("FIXED");

    on.error("boom", &args!["code", 500]);
    off.error("boom", &args!["code", 500]);

    assert_eq!(with_stamp.contents(), format!("FIXED ∣ {}", without_stamp.contents()));
}

#[test]
fn test_level_text_toggle_removes_only_label() {
    let with_label = MemorySink::new();
    let without_label = MemorySink::new();

    plain_logger(&with_label).with_level_text(true).debug("m", &args!["k", "v"]);
    plain_logger(&without_label).with_level_text(false).debug("m", &args!["k", "v"]);

    assert_eq!(with_label.contents(), format!("DEBUG   ∣ {}", without_label.contents()));
}

#[test]
fn test_caller_toggle_removes_only_caller_row() {
    let with_caller = MemorySink::new();
    let without_caller = MemorySink::new();

    let on = plain_logger(&with_caller);
    on.with_caller(true);
    let off = plain_logger(&without_caller);

    on.notice("m", &args!["k", "v"]);
    off.notice("m", &args!["k", "v"]);

    let on_contents = with_caller.contents();
    let mut on_lines: Vec<&str> = on_contents.lines().collect();
    let caller_row = on_lines.pop().expect("caller row");
    assert!(caller_row.starts_with("  └─ caller: "));
    assert_eq!(on_lines, vec!["• m", "  ├─ k: v"]);
    assert_eq!(without_caller.contents(), "• m\n  └─ k: v\n");
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("console.log");

    let file = fs::File::create(&log_file).expect("Failed to create log file");
    let logger = Logger::builder()
        .min_level(Level::Info)
        .colors(false)
        .writer(file)
        .build();

    logger.info("written to disk", &args!["path", log_file.display().to_string()]);
    logger.debug("filtered", &[]);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with("• written to disk\n"));
    assert!(!content.contains("filtered"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_settings_from_json() {
    let settings: LoggerSettings = serde_json::from_str(
        r#"{"min_level":"Warn","show_level_text":true,"use_colors":false}"#,
    )
    .expect("valid settings");
    let sink = MemorySink::new();
    let logger = Logger::from_settings(settings, sink.clone());

    logger.info("hidden", &[]);
    logger.warn("shown", &[]);

    assert_eq!(sink.contents(), "WARN    ∣ ⚠ shown\n");
}

#[test]
fn test_metrics_track_outcomes() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink);
    logger.set_level(Level::Info);

    logger.debug("suppressed", &[]);
    logger.info("written", &[]);
    logger.error_entry().msg("written");

    let metrics = logger.metrics();
    assert_eq!(metrics.records_written(), 2);
    assert_eq!(metrics.records_suppressed(), 1);
    assert_eq!(metrics.write_failures(), 0);
}

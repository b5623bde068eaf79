//! # Rust Console Logger
//!
//! A leveled, structured console logger producing human-readable, colorized
//! records with ordered key/value fields drawn as a tree below the message.
//!
//! ```text
//! 2025-01-08 10:30:45 ∣ INFO    ∣ • deploy complete
//!   ├─ service: api
//!   └─ duration_ms: 120
//! ```
//!
//! ## Features
//!
//! - **Ten levels**: Trace, Debug, Notice, Info, Warn, Ok, Success, Error,
//!   Fatal and the undecorated, never-filtered Print
//! - **Two APIs**: one-shot calls with interleaved key/value arguments, and
//!   chained entries; both render identically
//! - **Thread Safe**: one write guard per logger keeps records contiguous
//! - **Zero setup**: free functions log through a shared default logger
//!
//! ## Example
//!
//! ```
//! use rust_console_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().colors(false).writer(sink.clone()).build();
//!
//! logger.info("deploy complete", &["service".into(), "api".into()]);
//! logger.error_entry().field("attempt", 3).msg("retry budget exhausted");
//!
//! assert!(sink.contents().starts_with("• deploy complete\n  └─ service: api\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerInfo, Entry, FieldValue, Fields, Level, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, LoggerSettings, Result, TimestampFormat,
    };
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    render, CallerInfo, Emphasis, Entry, FieldValue, Fields, Level, LevelStyle, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, LoggerSettings, Paint, Result, TimestampFormat,
    CALLER_KEY, DEFAULT_TIME_FORMAT, ERROR_KEY, FATAL_EXIT_CODE,
};
pub use global::{
    debug, debug_entry, default_logger, entry, error, error_entry, fatal, fatal_entry, flush,
    info, info_entry, log, notice, notice_entry, ok, ok_entry, print, print_entry, set_level,
    set_timestamp_format, set_writer, success, success_entry, trace, trace_entry, warn,
    warn_entry, with_caller, with_colors, with_level_text, with_timestamp,
};
pub use sinks::MemorySink;

/// Build the flat `key, value, ...` argument list of the one-shot API.
///
/// # Example
///
/// ```
/// use rust_console_logger::{args, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().colors(false).writer(sink.clone()).build();
/// logger.info("deploy complete", &args!["service", "api", "duration_ms", 120]);
///
/// assert_eq!(
///     sink.contents(),
///     "• deploy complete\n  ├─ service: api\n  └─ duration_ms: 120\n"
/// );
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::FieldValue::from($value)),*]
    };
}

//! Logger configuration snapshot
//!
//! `LoggerSettings` is the plain-data half of a [`Logger`](super::Logger):
//! everything except the sink. The renderer only ever sees a cloned snapshot,
//! so a setter racing with a log call cannot tear a record's configuration.

use super::log_level::Level;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Configuration for rendering log records
///
/// # Examples
///
/// ```
/// use rust_console_logger::{Level, LoggerSettings};
///
/// let settings = LoggerSettings::new()
///     .with_min_level(Level::Debug)
///     .with_timestamp(true)
///     .with_custom_timestamp("%H:%M:%S");
/// assert!(settings.show_timestamp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Records below this level are suppressed (`Print` is never suppressed)
    pub min_level: Level,
    /// Prefix each header with the current time
    pub show_timestamp: bool,
    /// Prefix each header with the uppercase level label
    pub show_level_text: bool,
    /// Append a `caller` field with the source location of the log call
    pub show_caller: bool,
    /// Format of the timestamp segment
    pub timestamp_format: TimestampFormat,
    /// Emit terminal styling; when off, output is plain text
    pub use_colors: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            min_level: Level::Notice,
            show_timestamp: false,
            show_level_text: false,
            show_caller: false,
            timestamp_format: TimestampFormat::default(),
            use_colors: true,
        }
    }
}

impl LoggerSettings {
    /// Create settings with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    #[must_use]
    pub fn with_level_text(mut self, show: bool) -> Self {
        self.show_level_text = show;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, show: bool) -> Self {
        self.show_caller = show;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible template for the timestamp segment
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

//! Timestamp formatting utilities
//!
//! Provides the timestamp formats accepted by the logger's timestamp segment.
//! Any strftime-compatible template can be used through
//! [`TimestampFormat::Custom`], and plain strings convert into it.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write as _};

/// Default template of the timestamp segment: `2025-01-08 10:30:45`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_console_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// Time of day only: `10:30:45`
    Time,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_console_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    ///
    /// // Strings convert into a custom format
    /// let format: TimestampFormat = "%H:%M".into();
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime in any timezone according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::DateTime => datetime.format(DEFAULT_TIME_FORMAT).to_string(),
            TimestampFormat::Time => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                // Invalid specifiers fall back to the default template.
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => datetime.format(DEFAULT_TIME_FORMAT).to_string(),
                }
            }
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(format_str: &str) -> Self {
        TimestampFormat::Custom(format_str.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(format_str: String) -> Self {
        TimestampFormat::Custom(format_str)
    }
}

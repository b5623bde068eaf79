//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels are totally ordered; a record is rendered when its level is at
/// least the logger's minimum level. `Print` sits above every severity and is
/// never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Notice = 2,
    Info = 3,
    Warn = 4,
    Ok = 5,
    Success = 6,
    Error = 7,
    Fatal = 8,
    Print = 9,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 10] = [
        Level::Trace,
        Level::Debug,
        Level::Notice,
        Level::Info,
        Level::Warn,
        Level::Ok,
        Level::Success,
        Level::Error,
        Level::Fatal,
        Level::Print,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Ok => "OK",
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Print => "PRINT",
        }
    }

    /// Whether a record at this level passes a logger set to `min_level`.
    #[inline]
    pub fn passes(self, min_level: Level) -> bool {
        self == Level::Print || self >= min_level
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "OK" => Ok(Level::Ok),
            "SUCCESS" => Ok(Level::Success),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "PRINT" => Ok(Level::Print),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

//! Builder-mode log entries
//!
//! An [`Entry`] accumulates fields for one record and is consumed by
//! [`Entry::msg`], so it cannot be emitted twice.

use super::fields::{FieldValue, Fields};
use super::log_level::Level;
use super::logger::{Logger, FATAL_EXIT_CODE};
use std::fmt;
use std::panic::Location;

/// Reserved field key of the entry's error value.
pub const ERROR_KEY: &str = "err";

/// An in-progress, single-use log record
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().colors(false).writer(sink.clone()).build();
///
/// logger.info_entry()
///     .field("service", "api")
///     .field("duration_ms", 120)
///     .msg("deploy complete");
///
/// assert_eq!(
///     sink.contents(),
///     "• deploy complete\n  ├─ service: api\n  └─ duration_ms: 120\n"
/// );
/// ```
#[must_use = "an entry does nothing until `msg` is called"]
pub struct Entry<'a> {
    logger: &'a Logger,
    level: Level,
    error: Option<FieldValue>,
    fields: Fields,
}

impl<'a> Entry<'a> {
    pub fn new(logger: &'a Logger, level: Level) -> Self {
        Self {
            logger,
            level,
            error: None,
            fields: Fields::new(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Add a field; an existing key keeps its position and takes the new value
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.set(key, value);
        self
    }

    /// Add every field of `fields`, in order
    pub fn fields(mut self, fields: Fields) -> Self {
        for (key, value) in fields.iter() {
            self.fields.set(key, value.clone());
        }
        self
    }

    /// Attach an error, rendered as an `err` row after every user field.
    ///
    /// A user field that is also keyed `err` is kept in its own position; the
    /// error row is appended after it rather than replacing it.
    pub fn err(mut self, err: &dyn std::error::Error) -> Self {
        self.error = Some(FieldValue::error(err));
        self
    }

    /// Emit the record. A `Fatal` entry exits the process after the write.
    #[track_caller]
    pub fn msg(self, message: impl AsRef<str>) {
        self.emit(message.as_ref(), Location::caller());
    }

    /// Emit with a preformatted message, as produced by `format_args!`
    #[track_caller]
    pub fn msg_fmt(self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        match args.as_str() {
            Some(message) => self.emit(message, location),
            None => self.emit(&args.to_string(), location),
        }
    }

    /// Emit the record, then exit the process with status 1 whatever the
    /// level. Returns `!`, so it can end a diverging expression.
    ///
    /// ```no_run
    /// # use rust_console_logger::prelude::*;
    /// # let logger = Logger::new();
    /// fn port(raw: &str, logger: &Logger) -> u16 {
    ///     match raw.parse() {
    ///         Ok(port) => port,
    ///         Err(e) => logger.fatal_entry().err(&e).msg_exit("invalid port"),
    ///     }
    /// }
    /// ```
    #[track_caller]
    pub fn msg_exit(self, message: impl AsRef<str>) -> ! {
        self.emit(message.as_ref(), Location::caller());
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn emit(self, message: &str, location: &'static Location<'static>) {
        let Entry {
            logger,
            level,
            error,
            mut fields,
        } = self;

        if logger.enabled(level) {
            if let Some(error) = error {
                fields.append(ERROR_KEY, error);
            }
            let _ = logger.write_record(level, message, &fields, location);
        } else {
            logger.metrics().record_suppressed();
        }

        if level == Level::Fatal {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("level", &self.level)
            .field("error", &self.error)
            .field("fields", &self.fields)
            .finish()
    }
}

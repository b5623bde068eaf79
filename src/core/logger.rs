//! Main logger implementation

use super::{
    caller::CallerInfo,
    entry::Entry,
    error::{LoggerError, Result},
    fields::{FieldValue, Fields},
    log_level::Level,
    metrics::LoggerMetrics,
    render::render,
    settings::LoggerSettings,
    timestamp::TimestampFormat,
};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::panic::Location;

/// Exit status used after a `Fatal` record has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

type Sink = Box<dyn Write + Send>;

/// A leveled console logger writing rendered records to one sink.
///
/// The sink mutex is the write guard: taking the settings snapshot, rendering
/// and writing all happen while it is held, so concurrent records never
/// interleave. Setters only take the settings lock. A setter racing with a log
/// call may or may not be observed by that call; configuration is meant to be
/// set up front rather than flipped at high frequency.
pub struct Logger {
    settings: RwLock<LoggerSettings>,
    sink: Mutex<Sink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing to stderr with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_settings(LoggerSettings::default(), std::io::stderr())
    }

    /// Create a logger with default settings writing to `writer`
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::from_settings(LoggerSettings::default(), writer)
    }

    #[must_use]
    pub fn from_settings<W: Write + Send + 'static>(settings: LoggerSettings, writer: W) -> Self {
        Self {
            settings: RwLock::new(settings),
            sink: Mutex::new(Box::new(writer)),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn set_level(&self, level: Level) -> &Self {
        self.settings.write().min_level = level;
        self
    }

    pub fn with_timestamp(&self, show: bool) -> &Self {
        self.settings.write().show_timestamp = show;
        self
    }

    /// Append a `caller` row with the call site to every record. It follows
    /// every user field, including one that is itself keyed `caller`.
    pub fn with_caller(&self, show: bool) -> &Self {
        self.settings.write().show_caller = show;
        self
    }

    pub fn with_level_text(&self, show: bool) -> &Self {
        self.settings.write().show_level_text = show;
        self
    }

    pub fn with_colors(&self, use_colors: bool) -> &Self {
        self.settings.write().use_colors = use_colors;
        self
    }

    /// Set the timestamp format; plain strings are strftime templates
    pub fn set_timestamp_format(&self, format: impl Into<TimestampFormat>) -> &Self {
        self.settings.write().timestamp_format = format.into();
        self
    }

    /// Replace the sink. Waits for any record currently being written.
    pub fn set_writer<W: Write + Send + 'static>(&self, writer: W) -> &Self {
        let mut sink = self.sink.lock();
        let _ = sink.flush();
        *sink = Box::new(writer);
        self
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> LoggerSettings {
        self.settings.read().clone()
    }

    pub fn level(&self) -> Level {
        self.settings.read().min_level
    }

    /// Whether a record at `level` would be rendered right now
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.settings.read().min_level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }

    /// Log `message` with flat, interleaved `key, value, ...` arguments.
    ///
    /// Sink write errors are counted in [`LoggerMetrics::write_failures`] and
    /// otherwise ignored. A `Fatal` record does not exit here; use
    /// [`Logger::fatal`] for that.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl AsRef<str>, args: &[FieldValue]) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }
        let fields = Fields::from_args(args.iter().cloned());
        let _ = self.write_record(level, message.as_ref(), &fields, Location::caller());
    }

    /// Like [`Logger::log`], but hands a sink write error back to the caller.
    #[track_caller]
    pub fn try_log(&self, level: Level, message: impl AsRef<str>, args: &[FieldValue]) -> Result<()> {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return Ok(());
        }
        let fields = Fields::from_args(args.iter().cloned());
        self.write_record(level, message.as_ref(), &fields, Location::caller())
    }

    /// Render and write one record while holding the write guard.
    pub(crate) fn write_record(
        &self,
        level: Level,
        message: &str,
        fields: &Fields,
        location: &'static Location<'static>,
    ) -> Result<()> {
        let mut sink = self.sink.lock();
        let settings = self.settings.read().clone();
        let caller = settings
            .show_caller
            .then(|| CallerInfo::from_location(location));

        let output = render(level, message, fields, &settings, caller.as_ref(), &Local::now());

        match sink.write_all(output.as_bytes()).and_then(|()| sink.flush()) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(LoggerError::sink_write(level.to_str(), "cannot write record", e))
            }
        }
    }

    /// Start a builder-mode entry at `level`
    pub fn entry(&self, level: Level) -> Entry<'_> {
        Entry::new(self, level)
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Trace, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Debug, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Notice, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Info, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Warn, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn ok(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Ok, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn success(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Success, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Error, message, args);
    }

    /// Write a `Fatal` record, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>, args: &[FieldValue]) -> ! {
        self.log(Level::Fatal, message, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write an undecorated record: no timestamp, label or icon, never filtered.
    #[inline]
    #[track_caller]
    pub fn print(&self, message: impl AsRef<str>, args: &[FieldValue]) {
        self.log(Level::Print, message, args);
    }

    pub fn trace_entry(&self) -> Entry<'_> {
        self.entry(Level::Trace)
    }

    pub fn debug_entry(&self) -> Entry<'_> {
        self.entry(Level::Debug)
    }

    pub fn notice_entry(&self) -> Entry<'_> {
        self.entry(Level::Notice)
    }

    pub fn info_entry(&self) -> Entry<'_> {
        self.entry(Level::Info)
    }

    pub fn warn_entry(&self) -> Entry<'_> {
        self.entry(Level::Warn)
    }

    pub fn ok_entry(&self) -> Entry<'_> {
        self.entry(Level::Ok)
    }

    pub fn success_entry(&self) -> Entry<'_> {
        self.entry(Level::Success)
    }

    pub fn error_entry(&self) -> Entry<'_> {
        self.entry(Level::Error)
    }

    /// Emitting a fatal entry exits the process after the write.
    pub fn fatal_entry(&self) -> Entry<'_> {
        self.entry(Level::Fatal)
    }

    pub fn print_entry(&self) -> Entry<'_> {
        self.entry(Level::Print)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.sink.get_mut().flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .min_level(Level::Debug)
///     .level_text(true)
///     .colors(false)
///     .writer(sink.clone())
///     .build();
///
/// logger.debug("ready", &[]);
/// assert_eq!(sink.contents(), "DEBUG   ∣ • ready\n");
/// ```
pub struct LoggerBuilder {
    settings: LoggerSettings,
    writer: Option<Sink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            settings: LoggerSettings::default(),
            writer: None,
        }
    }

    /// Replace all settings at once
    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: LoggerSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.settings.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, show: bool) -> Self {
        self.settings.show_timestamp = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn caller(mut self, show: bool) -> Self {
        self.settings.show_caller = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_text(mut self, show: bool) -> Self {
        self.settings.show_level_text = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.settings.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.settings.timestamp_format = format.into();
        self
    }

    /// Set the sink. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(std::io::stderr()));
        Logger {
            settings: RwLock::new(self.settings),
            sink: Mutex::new(writer),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

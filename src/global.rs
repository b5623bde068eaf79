//! Process-wide default logger
//!
//! The default logger is created on first use with stderr as its sink, a
//! minimum level of `Notice`, every display toggle off, the
//! `%Y-%m-%d %H:%M:%S` timestamp format and colors on. The free functions
//! below delegate to it. Code that needs isolated configuration or its own
//! sink should construct a [`Logger`] instead of reconfiguring this one.

use crate::core::{Entry, FieldValue, Level, Logger, Result, TimestampFormat};
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared default logger, initialized once on first access
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

pub fn set_level(level: Level) -> &'static Logger {
    default_logger().set_level(level)
}

pub fn with_timestamp(show: bool) -> &'static Logger {
    default_logger().with_timestamp(show)
}

pub fn with_caller(show: bool) -> &'static Logger {
    default_logger().with_caller(show)
}

pub fn with_level_text(show: bool) -> &'static Logger {
    default_logger().with_level_text(show)
}

pub fn with_colors(use_colors: bool) -> &'static Logger {
    default_logger().with_colors(use_colors)
}

pub fn set_timestamp_format(format: impl Into<TimestampFormat>) -> &'static Logger {
    default_logger().set_timestamp_format(format)
}

pub fn set_writer<W: Write + Send + 'static>(writer: W) -> &'static Logger {
    default_logger().set_writer(writer)
}

pub fn flush() -> Result<()> {
    default_logger().flush()
}

#[track_caller]
pub fn log(level: Level, message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().log(level, message, args);
}

#[track_caller]
pub fn trace(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().trace(message, args);
}

#[track_caller]
pub fn debug(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().debug(message, args);
}

#[track_caller]
pub fn notice(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().notice(message, args);
}

#[track_caller]
pub fn info(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().info(message, args);
}

#[track_caller]
pub fn warn(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().warn(message, args);
}

#[track_caller]
pub fn ok(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().ok(message, args);
}

#[track_caller]
pub fn success(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().success(message, args);
}

#[track_caller]
pub fn error(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().error(message, args);
}

#[track_caller]
pub fn fatal(message: impl AsRef<str>, args: &[FieldValue]) -> ! {
    default_logger().fatal(message, args)
}

#[track_caller]
pub fn print(message: impl AsRef<str>, args: &[FieldValue]) {
    default_logger().print(message, args);
}

pub fn entry(level: Level) -> Entry<'static> {
    default_logger().entry(level)
}

pub fn trace_entry() -> Entry<'static> {
    entry(Level::Trace)
}

pub fn debug_entry() -> Entry<'static> {
    entry(Level::Debug)
}

pub fn notice_entry() -> Entry<'static> {
    entry(Level::Notice)
}

pub fn info_entry() -> Entry<'static> {
    entry(Level::Info)
}

pub fn warn_entry() -> Entry<'static> {
    entry(Level::Warn)
}

pub fn ok_entry() -> Entry<'static> {
    entry(Level::Ok)
}

pub fn success_entry() -> Entry<'static> {
    entry(Level::Success)
}

pub fn error_entry() -> Entry<'static> {
    entry(Level::Error)
}

pub fn fatal_entry() -> Entry<'static> {
    entry(Level::Fatal)
}

pub fn print_entry() -> Entry<'static> {
    entry(Level::Print)
}

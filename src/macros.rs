//! Logging macros for ergonomic message formatting.
//!
//! The message takes `format!` syntax; fields follow a `;` as
//! `key => value` pairs. Macros go through the builder API, so the output
//! is identical to the equivalent `Entry` chain and the caller location is
//! the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().colors(false).writer(sink.clone()).build();
//!
//! let ms = 120;
//! info!(logger, "deploy complete in {}ms", ms; "service" => "api", "region" => "eu");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "• deploy complete in 120ms\n  ├─ service: api\n  └─ region: eu\n"
//! );
//! ```
//!
//! There is no `print!` counterpart to [`Logger::print`](crate::Logger::print),
//! to stay clear of the standard library macro.

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_console_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500; "retry" => true);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(; $($key:expr => $value:expr),+ $(,)?)?) => {
        $logger
            .entry($level)
            $($(.field($key, $value))+)?
            .msg_fmt(format_args!($fmt $(, $arg)*))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Listening on port {}", 8080; "tls" => false);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an ok-level message.
#[macro_export]
macro_rules! ok {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Ok, $($arg)+)
    };
}

/// Log a success-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Success, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_console_logger::error;
/// error!(logger, "Failed to connect to {}", "db.internal"; "attempt" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal message and exit the process with status 1.
///
/// The expansion has type `!`.
///
/// # Examples
///
/// ```no_run
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::fatal;
/// let index: Option<u32> = None;
/// let index = match index {
///     Some(index) => index,
///     None => fatal!(logger, "Unrecoverable state: {}", "corrupt index"),
/// };
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+);
        ::std::process::exit($crate::FATAL_EXIT_CODE)
    }};
}

//! Core logger types

pub mod caller;
pub mod entry;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod settings;
pub mod style;
pub mod timestamp;

pub use caller::{CallerInfo, CALLER_KEY};
pub use entry::{Entry, ERROR_KEY};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use render::render;
pub use settings::LoggerSettings;
pub use style::{Emphasis, LevelStyle, Paint};
pub use timestamp::{TimestampFormat, DEFAULT_TIME_FORMAT};

//! Error types for the console logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writing a rendered record to the sink failed
    #[error("Sink write failed for {level} record: {message}")]
    SinkWrite {
        level: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A level name that does not match any known level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a sink write error with the level of the record that failed
    pub fn sink_write(
        level: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::SinkWrite {
            level: level.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("verbose");
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::sink_write("ERROR", "cannot write record", io_err);
        assert_eq!(
            err.to_string(),
            "Sink write failed for ERROR record: cannot write record"
        );
    }

    #[test]
    fn test_sink_write_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "zero bytes");
        let err = LoggerError::sink_write("INFO", "short write", io_err);
        let source = err.source().expect("source is kept");
        assert_eq!(source.to_string(), "zero bytes");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}

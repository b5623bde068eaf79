//! In-memory sink implementation

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A cloneable in-memory sink
///
/// Clones share one buffer, so a test can hand one clone to a logger and
/// read the rendered output through another.
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().colors(false).writer(sink.clone()).build();
/// logger.notice("hello", &[]);
///
/// assert_eq!(sink.contents(), "• hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Take the buffered bytes, leaving the sink empty
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

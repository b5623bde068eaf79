//! Sink implementations
//!
//! Any `std::io::Write + Send` value is a valid sink (stderr, stdout, a file,
//! a socket). This module holds the sinks the crate ships itself.

pub mod memory;

pub use memory::MemorySink;

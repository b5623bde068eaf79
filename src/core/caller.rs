//! Source location of a log call
//!
//! Caller resolution relies on `#[track_caller]` rather than stack walking.
//! Every public entry point that logs (the `Logger` level methods, the
//! `Entry` emitters, the free functions and the macros) carries the attribute,
//! so `Location::caller()` reports the application's call site.
//!
//! Any helper layered on top of these entry points must itself be marked
//! `#[track_caller]`; otherwise the reported location becomes the helper's own
//! body. `tests/integration_tests.rs` pins this with a regression test.

use std::fmt;
use std::panic::Location;

/// Reserved field key of the caller location.
pub const CALLER_KEY: &str = "caller";

/// A resolved `(path, line)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: String,
    pub line: u32,
}

impl CallerInfo {
    /// Capture the location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self {
            file: relative_path(location.file()),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Normalize separators and strip this crate's source root.
fn relative_path(file: &str) -> String {
    let file = file.replace('\\', "/");
    let root = env!("CARGO_MANIFEST_DIR").replace('\\', "/");
    match file.strip_prefix(root.as_str()) {
        Some(rest) => rest.trim_start_matches('/').to_string(),
        None => file,
    }
}

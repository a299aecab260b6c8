//! Strongly-typed domain structures for the serving front end.
use std::fmt;

/// Base URL of the public Google Cloud Storage endpoint.
pub const DEFAULT_GCS_BASE: &str = "https://storage.googleapis.com";

/// Access point for the storage service bucket objects are fetched from.
///
/// The front end does not talk to storage itself; the configured base URL is
/// handed to the collaborators that do, and supplies the fallback for the
/// `gcs` config field when the document leaves it empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Storage {
    base: String,
}

impl Storage {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(DEFAULT_GCS_BASE)
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

//! Unique id issuance

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// An id issued by [`IdIssuer`], unique across every concept within one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedId(pub String);

impl fmt::Display for GeneratedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeneratedId {
    fn from(s: &str) -> Self {
        GeneratedId(s.to_string())
    }
}

impl From<String> for GeneratedId {
    fn from(s: String) -> Self {
        GeneratedId(s)
    }
}

/// Monotonic id source; construct one per simulation run and share it.
///
/// Ids are unique within one process lifetime only and are never reused.
/// Issuance is a single atomic increment, so concurrent callers cannot
/// collide. Restoring the counter when a saved run is loaded is future work.
#[derive(Debug, Default)]
pub struct IdIssuer {
    counter: AtomicU64,
}

impl IdIssuer {
    pub fn new() -> Self {
        IdIssuer::default()
    }

    /// Issue the next id. The first issued id is `"1"`.
    pub fn next(&self) -> GeneratedId {
        let value = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        GeneratedId(value.to_string())
    }
}

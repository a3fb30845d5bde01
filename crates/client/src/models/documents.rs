//! Document import/export types.

use std::fmt;

/// Conflict behavior for bulk document import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportAction {
    #[default]
    Create,
    Upsert,
    Update,
    Emplace,
}

impl ImportAction {
    /// The `action` query-parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Upsert => "upsert",
            Self::Update => "update",
            Self::Emplace => "emplace",
        }
    }
}

impl fmt::Display for ImportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-collection outcome of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub succeeded: u64,
    pub failed: u64,
}

impl ImportSummary {
    /// Count one line of the server's JSONL import response.
    ///
    /// This is a substring scan for the `"success":true|false` marker, not a
    /// structural parse; it is fragile against key reordering or whitespace
    /// changes in the server's response encoding. Kept for behavioral parity
    /// with the exporting tool's counts; swap for `serde_json::from_str` per
    /// line if that parity stops mattering.
    pub fn record_line(&mut self, line: &str) {
        if line.contains("\"success\":true") {
            self.succeeded += 1;
        } else if line.contains("\"success\":false") {
            self.failed += 1;
        }
    }

    /// Total lines counted, successful or not.
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

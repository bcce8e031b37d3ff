//! Structured outcome reporting for organization runs.
//!
//! Organizer operations return an [`OrganizeReport`] instead of printing
//! progress themselves; the caller decides how (and whether) to display it.

use crate::file_mover::OrganizeError;
use serde::Serialize;

/// A single entry that could not be organized, with the reason why.
#[derive(Debug, Clone, Serialize)]
pub struct EntryFailure {
    /// The name of the entry that failed.
    pub name: String,
    /// Human-readable description of the underlying cause.
    pub reason: String,
}

/// Accumulated outcome of one organization run.
///
/// Built fresh per invocation and owned by the calling operation.
/// Invariant: `organized + skipped + errored == total`.
#[derive(Debug, Default, Serialize)]
pub struct OrganizeReport {
    /// Files successfully moved to their destination folders.
    pub organized: usize,
    /// Entries left in place: subdirectories and filtered-out files.
    pub skipped: usize,
    /// Files that hit a per-entry failure.
    pub errored: usize,
    /// Total top-level entries seen.
    pub total: usize,
    /// One record per errored entry.
    pub failures: Vec<EntryFailure>,
}

impl OrganizeReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully moved file.
    pub fn record_organized(&mut self) {
        self.organized += 1;
        self.total += 1;
    }

    /// Records a skipped entry (subdirectory or filtered file).
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
        self.total += 1;
    }

    /// Records a per-entry failure, keeping its name and cause.
    pub fn record_failure(&mut self, name: &str, error: &OrganizeError) {
        self.errored += 1;
        self.total += 1;
        self.failures.push(EntryFailure {
            name: name.to_string(),
            reason: error.to_string(),
        });
    }

    /// Returns true if no entry failed.
    pub fn is_clean(&self) -> bool {
        self.errored == 0
    }
}

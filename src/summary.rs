//! Recursive file-type summary.
//!
//! Walks a directory tree and counts files per extension without moving,
//! creating, or deleting anything.

use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Mapping from extension key to file count.
///
/// Keys keep their leading dot and are lowercased (".txt"); files without
/// an extension key on the empty string.
pub type ExtensionTally = HashMap<String, usize>;

pub struct SummaryAnalyzer;

impl SummaryAnalyzer {
    /// Tallies every file under `path`, recursing to unbounded depth.
    ///
    /// An absent or empty directory yields an empty tally rather than an
    /// error; unreadable subtrees are left out of the count. This operation
    /// is read-only.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::summary::SummaryAnalyzer;
    /// use std::path::Path;
    ///
    /// let tally = SummaryAnalyzer::summarize(Path::new("/home/user/projects"));
    /// for (ext, count) in &tally {
    ///     println!("{}: {}", ext, count);
    /// }
    /// ```
    pub fn summarize(path: &Path) -> ExtensionTally {
        let mut tally = ExtensionTally::new();

        if !path.is_dir() {
            return tally;
        }

        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                *tally.entry(tally_key(entry.path())).or_insert(0) += 1;
            }
        }

        tally
    }
}

/// Returns the tally key for a file path: the lowercased extension with its
/// leading dot, or the empty string for extensionless files.
fn tally_key(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Organizes files into year/month subfolders by last-modification date.
///
/// Each top-level file of the source directory is moved into
/// `source/<year>/<month label>/`, where the month label pairs the
/// zero-padded month number with its full name ("01 - January").
/// Subdirectories are skipped and counted, never moved or descended into.
use crate::config::CompiledFilters;
use crate::file_mover::{self, FileMover, OrganizeError, OrganizeResult};
use crate::report::OrganizeReport;
use chrono::{DateTime, Datelike, Local};
use std::path::Path;
use std::time::SystemTime;

pub struct DateOrganizer;

impl DateOrganizer {
    /// Organizes every top-level file of `source` by modification date.
    ///
    /// Returns a precondition error if `source` is missing or not a
    /// directory; otherwise per-entry failures are recorded in the report
    /// and processing continues with the next entry.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::date_organizer::DateOrganizer;
    /// use std::path::Path;
    ///
    /// match DateOrganizer::organize(Path::new("/home/user/Downloads")) {
    ///     Ok(report) => println!("Organized {} files", report.organized),
    ///     Err(e) => eprintln!("Error: {}", e),
    /// }
    /// ```
    pub fn organize(source: &Path) -> OrganizeResult<OrganizeReport> {
        Self::organize_with_filters(source, &CompiledFilters::default())
    }

    /// Like [`organize`](Self::organize), but files excluded by `filters`
    /// are counted as skipped instead of being moved.
    pub fn organize_with_filters(
        source: &Path,
        filters: &CompiledFilters,
    ) -> OrganizeResult<OrganizeReport> {
        let entries = file_mover::snapshot_top_level(source)?;
        let mut report = OrganizeReport::new();

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if path.is_dir() {
                report.record_skipped();
                continue;
            }
            if !filters.should_include(&path) {
                report.record_skipped();
                continue;
            }

            match Self::organize_entry(source, &path) {
                Ok(()) => report.record_organized(),
                Err(e) => report.record_failure(&name, &e),
            }
        }

        Ok(report)
    }

    /// Classifies and moves a single file; any failure belongs to this
    /// entry alone.
    fn organize_entry(source: &Path, file_path: &Path) -> OrganizeResult<()> {
        let modified = file_path
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| OrganizeError::TimestampUnreadable {
                path: file_path.to_path_buf(),
                source: e,
            })?;

        let (year, month) = date_folders(modified);
        let dest_dir = source.join(year).join(month);

        FileMover::move_into(file_path, &dest_dir)?;
        Ok(())
    }
}

/// Derives the (year, month label) folder names from a timestamp,
/// using the local time zone.
///
/// # Examples
///
/// ```
/// use dirsort::date_organizer::date_folders;
/// use std::time::SystemTime;
///
/// let (year, month) = date_folders(SystemTime::now());
/// assert_eq!(year.len(), 4);
/// assert!(month.contains(" - "));
/// ```
pub fn date_folders(timestamp: SystemTime) -> (String, String) {
    let local: DateTime<Local> = timestamp.into();
    (
        format!("{:04}", local.year()),
        local.format("%m - %B").to_string(),
    )
}

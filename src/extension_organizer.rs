/// Organizes files into per-extension subfolders.
///
/// Each top-level file of the source directory is moved into a folder named
/// after its lowercased extension; extensionless files land in
/// [`NO_EXTENSION`]. An optional destination base relocates the extension
/// folders outside the source directory.
use crate::config::CompiledFilters;
use crate::file_mover::{self, FileMover, OrganizeResult};
use crate::report::OrganizeReport;
use std::path::Path;

/// Folder name for files without an extension.
pub const NO_EXTENSION: &str = "no_extension";

pub struct ExtensionOrganizer;

impl ExtensionOrganizer {
    /// Organizes every top-level file of `source` by extension.
    ///
    /// When `dest_base` is supplied, extension folders are created under it
    /// (the base itself is created if absent; failure to create it aborts
    /// the whole run before any entry is processed). Otherwise folders are
    /// created inside `source`.
    ///
    /// Extension comparison is case-insensitive: `a.JPG` and `b.jpg` both
    /// land in `jpg/`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::extension_organizer::ExtensionOrganizer;
    /// use std::path::Path;
    ///
    /// let report = ExtensionOrganizer::organize(Path::new("/home/user/Downloads"), None);
    /// match report {
    ///     Ok(r) => println!("{} organized, {} skipped", r.organized, r.skipped),
    ///     Err(e) => eprintln!("Error: {}", e),
    /// }
    /// ```
    pub fn organize(source: &Path, dest_base: Option<&Path>) -> OrganizeResult<OrganizeReport> {
        Self::organize_with_filters(source, dest_base, &CompiledFilters::default())
    }

    /// Like [`organize`](Self::organize), but files excluded by `filters`
    /// are counted as skipped instead of being moved.
    pub fn organize_with_filters(
        source: &Path,
        dest_base: Option<&Path>,
        filters: &CompiledFilters,
    ) -> OrganizeResult<OrganizeReport> {
        let entries = file_mover::snapshot_top_level(source)?;

        // An uncreatable destination base is a precondition failure: abort
        // before touching any entry.
        if let Some(base) = dest_base {
            FileMover::ensure_dir(base)?;
        }
        let dest_root = dest_base.unwrap_or(source);

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

            let dest_dir = dest_root.join(extension_token(&path));
            match FileMover::move_into(&path, &dest_dir) {
                Ok(_) => report.record_organized(),
                Err(e) => report.record_failure(&name, &e),
            }
        }

        Ok(report)
    }
}

/// Returns the classification token for a file: its lowercased extension,
/// or [`NO_EXTENSION`] when there is none.
///
/// Dotfiles like `.gitignore` and names with a trailing dot count as
/// extensionless.
///
/// # Examples
///
/// ```
/// use dirsort::extension_organizer::extension_token;
/// use std::path::Path;
///
/// assert_eq!(extension_token(Path::new("photo.JPG")), "jpg");
/// assert_eq!(extension_token(Path::new("README")), "no_extension");
/// ```
pub fn extension_token(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

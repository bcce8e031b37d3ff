/// Filesystem primitives shared by the organizer components.
///
/// This module owns directory creation and the file-move primitive with its
/// collision policy, plus the error type used across all organization
/// operations.
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The source directory is missing or is not a directory.
    SourceNotFound { path: PathBuf },
    /// Failed to create a destination directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read an entry's last-modification time.
    TimestampUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move an entry to its destination.
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    /// A same-named entry already exists at the destination.
    DestinationOccupied { path: PathBuf },
    /// Failed to list the source directory.
    ListingFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceNotFound { path } => {
                write!(f, "Source directory not found: {}", path.display())
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::TimestampUnreadable { path, source } => {
                write!(
                    f,
                    "Failed to read modification time of {}: {}",
                    path.display(),
                    source
                )
            }
            Self::MoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Self::DestinationOccupied { path } => {
                write!(f, "Destination already occupied: {}", path.display())
            }
            Self::ListingFailed { path, source } => {
                write!(f, "Failed to list directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Validates the source directory and snapshots its top-level entries.
///
/// The listing is taken once before any entry is processed, so destination
/// directories created mid-run are never re-visited within the same run.
pub fn snapshot_top_level(source: &Path) -> OrganizeResult<Vec<fs::DirEntry>> {
    if !source.is_dir() {
        return Err(OrganizeError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let reader = fs::read_dir(source).map_err(|e| OrganizeError::ListingFailed {
        path: source.to_path_buf(),
        source: e,
    })?;

    Ok(reader.flatten().collect())
}

/// Moves files into destination directories, creating them as needed.
pub struct FileMover;

impl FileMover {
    /// Ensures a directory path exists, creating missing segments.
    ///
    /// Creation is recursive and idempotent: calling this twice on the same
    /// path never fails, and an already-present directory is left untouched.
    pub fn ensure_dir(path: &Path) -> OrganizeResult<()> {
        fs::create_dir_all(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Moves a file into a destination directory, preserving its filename.
    ///
    /// The destination directory is created if absent. If the destination
    /// already contains a same-named entry, the move fails with
    /// `DestinationOccupied` rather than overwriting it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_mover::FileMover;
    /// use std::path::Path;
    ///
    /// let result = FileMover::move_into(
    ///     Path::new("/downloads/photo.jpg"),
    ///     Path::new("/downloads/jpg"),
    /// );
    ///
    /// match result {
    ///     Ok(dest) => println!("Moved to {}", dest.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_into(file_path: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
        Self::ensure_dir(dest_dir)?;

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::MoveFailed {
                from: file_path.to_path_buf(),
                to: dest_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination = dest_dir.join(file_name);

        // Never overwrite: a same-named entry at the destination is a
        // per-entry error, not a silent replacement.
        if destination.exists() {
            return Err(OrganizeError::DestinationOccupied { path: destination });
        }

        fs::rename(file_path, &destination).map_err(|e| OrganizeError::MoveFailed {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        Ok(destination)
    }
}

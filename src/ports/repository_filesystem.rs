//! Repository-level filesystem operations.
//!
//! This port provides file I/O scoped to the repository root. It does not
//! know the hooks/routes layout; that belongs to the domain.

use crate::domain::AppError;

/// Port for repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    ///
    /// Failures are reported as `AppError::WriteFailure` naming `path`.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Replace a file wholesale: write a sibling temporary file, then rename
    /// it over `path`. Readers see either the old or the new content.
    fn replace_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}

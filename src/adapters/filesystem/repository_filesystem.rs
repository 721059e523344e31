//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        write_with_parents(&full_path, content).map_err(|source| write_failure(path, source))
    }

    fn replace_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        replace_atomically(&full_path, content).map_err(|source| write_failure(path, source))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::create_dir_all(full_path).map_err(|source| write_failure(path, source))
    }
}

fn write_failure(path: &str, source: std::io::Error) -> AppError {
    AppError::WriteFailure { path: path.to_string(), source }
}

fn write_with_parents(full_path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full_path, content)
}

fn replace_atomically(full_path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = full_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = full_path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, full_path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

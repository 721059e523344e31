//! Test double for `RepositoryFilesystem`.

use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Directories exist implicitly whenever a stored path lies beneath them.
/// `fail_writes_to` makes writes to one path fail, for partial-failure tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
    failing_path: Arc<Mutex<Option<String>>>,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, failing_path: Arc::new(Mutex::new(None)) }
    }

    pub fn fail_writes_to(&self, path: &str) {
        *self.failing_path.lock().unwrap() = Some(path.to_string());
    }

    fn check_writable(&self, path: &str) -> Result<(), AppError> {
        if self.failing_path.lock().unwrap().as_deref() == Some(path) {
            return Err(AppError::WriteFailure {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        Ok(())
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.check_writable(path)?;
        self.files.add(path, content);
        Ok(())
    }

    fn replace_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_file(path, content)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.get(path).is_some() || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        self.files.files.lock().unwrap().keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir_all(&self, _path: &str) -> Result<(), AppError> {
        Ok(())
    }
}

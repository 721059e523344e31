//! Shared in-memory file backing store for test doubles.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and `MockRepositoryFs`.
///
/// Tests seed files via this handle before passing the double to production
/// code, then inspect what was written.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Sorted list of every stored path.
    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    /// Copy of the whole store, for before/after comparisons.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.files.lock().unwrap().clone()
    }
}

//! Test double for `RepositoryFilesystem`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Clones share the same file map, so a test can keep a handle while the
/// original is moved into an `AppContext`.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail with a permission error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

impl RepositoryFilesystem for MemoryFilesystem {
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }
}

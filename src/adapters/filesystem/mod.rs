use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// Writes generated files relative to a working directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl RepositoryFilesystem for FilesystemStore {
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }
}

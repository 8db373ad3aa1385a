use crate::domain::AppError;

/// Port for persisting generated files under the working directory.
pub trait RepositoryFilesystem {
    /// Write UTF-8 content to `path` (relative to the root), creating parent
    /// directories as needed and replacing any existing file.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;
}

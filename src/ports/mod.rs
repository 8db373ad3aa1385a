mod prompter;
mod repository_filesystem;

pub use prompter::Prompter;
pub use repository_filesystem::RepositoryFilesystem;

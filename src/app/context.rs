use crate::ports::{Prompter, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, P: Prompter> {
    filesystem: F,
    prompter: P,
}

impl<F: RepositoryFilesystem, P: Prompter> AppContext<F, P> {
    /// Create a new application context.
    pub fn new(filesystem: F, prompter: P) -> Self {
        Self { filesystem, prompter }
    }

    /// Get a reference to the filesystem the document is written to.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the form engine.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}

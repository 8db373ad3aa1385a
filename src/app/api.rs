//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{DialoguerPrompter, FilesystemStore};
use crate::app::{AppContext, commands::generate};
use crate::domain::default_project_name;
use crate::ports::Prompter;

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{AppError, DevContainerDocument};

/// Generate `.devcontainer/devcontainer.json` in the current directory using
/// terminal prompts.
pub fn generate() -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, DialoguerPrompter::new())
}

/// Generate `.devcontainer/devcontainer.json` under `root`, collecting input
/// through `prompter`.
///
/// The default project name offered to the prompter is the final segment of
/// `root`.
pub fn generate_at<P: Prompter>(
    root: impl Into<PathBuf>,
    prompter: P,
) -> Result<GenerateOutcome, AppError> {
    let root = root.into();
    let default_name = default_project_name(&root);
    let ctx = AppContext::new(FilesystemStore::new(root), prompter);

    generate::execute(&ctx, &default_name)
}

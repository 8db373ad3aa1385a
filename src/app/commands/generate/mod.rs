//! Generate command: walk the prompt stages and persist the document.

mod outcome;
mod stages;

pub use outcome::GenerateOutcome;

use crate::app::AppContext;
use crate::domain::{AppError, DevContainerDocument, Stage, devcontainer_json};
use crate::ports::{Prompter, RepositoryFilesystem};

/// Execute the generate command.
///
/// Runs every stage in order. The document is written only when the session
/// reaches `Stage::Completed`; a declined confirmation or any error leaves the
/// filesystem untouched.
pub fn execute<F, P>(
    ctx: &AppContext<F, P>,
    default_name: &str,
) -> Result<GenerateOutcome, AppError>
where
    F: RepositoryFilesystem,
    P: Prompter,
{
    let mut stage = Stage::CollectingName;
    loop {
        stage = match stage {
            Stage::Completed { document, warnings } => {
                return persist(ctx.filesystem(), document, warnings);
            }
            Stage::Cancelled => return Ok(GenerateOutcome::Cancelled),
            pending => stages::advance(ctx.prompter(), pending, default_name)?,
        };
    }
}

fn persist<F: RepositoryFilesystem>(
    filesystem: &F,
    document: DevContainerDocument,
    warnings: Vec<String>,
) -> Result<GenerateOutcome, AppError> {
    let content = document.to_json()?;
    let path = devcontainer_json();
    filesystem.write_file(&path, &content)?;
    Ok(GenerateOutcome::Written { path, document, warnings })
}

//! dcgen: interactively generate a `.devcontainer/devcontainer.json` scaffold.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{GenerateOutcome, generate, generate_at};
pub use domain::{AppError, DevContainerDocument, EditableField, ResolvedConfiguration, Template};
pub use ports::Prompter;

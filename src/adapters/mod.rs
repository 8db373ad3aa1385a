pub mod dialoguer_prompter;
pub mod filesystem;

pub use dialoguer_prompter::DialoguerPrompter;
pub use filesystem::FilesystemStore;

//! Path catalog for generated artifacts.
//!
//! All generated paths are relative to the working directory.

/// The devcontainer configuration directory name.
pub const DEVCONTAINER_DIR: &str = ".devcontainer";

/// The devcontainer configuration file name.
pub const DEVCONTAINER_FILE: &str = "devcontainer.json";

/// Relative path of the generated configuration file.
pub fn devcontainer_json() -> String {
    format!("{DEVCONTAINER_DIR}/{DEVCONTAINER_FILE}")
}

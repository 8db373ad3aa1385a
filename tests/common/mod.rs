//! Shared testing utilities for dcgen integration tests.

use assert_cmd::Command;
use dcgen::{AppError, EditableField, Prompter, ResolvedConfiguration, Template};
use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment whose project directory is named `myapp`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("myapp");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dcgen` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dcgen").expect("Failed to locate dcgen binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Path to the generated configuration file.
    pub fn devcontainer_path(&self) -> PathBuf {
        self.work_dir.join(".devcontainer").join("devcontainer.json")
    }

    /// Read the generated configuration file as raw text.
    pub fn read_devcontainer_text(&self) -> String {
        fs::read_to_string(self.devcontainer_path()).expect("devcontainer.json should exist")
    }

    /// Read and parse the generated configuration file.
    pub fn read_devcontainer(&self) -> Value {
        serde_json::from_str(&self.read_devcontainer_text())
            .expect("devcontainer.json should be valid JSON")
    }

    /// Assert that nothing was generated.
    pub fn assert_no_devcontainer(&self) {
        assert!(
            !self.work_dir.join(".devcontainer").exists(),
            ".devcontainer directory should not exist"
        );
    }
}

/// Prompter answering from fixed values, mimicking a user at the terminal.
#[allow(dead_code)]
#[derive(Default)]
pub struct Answers {
    pub name: Option<String>,
    pub template: String,
    pub custom_image: String,
    pub edits: Vec<(EditableField, String)>,
    pub confirm: bool,
    pub interrupt_confirmation: bool,
    pub seen_defaults: RefCell<Vec<(EditableField, String)>>,
}

#[allow(dead_code)]
impl Answers {
    /// Choose the template with this display name and confirm the write.
    pub fn template(name: &str) -> Self {
        Self { template: name.to_string(), confirm: true, ..Self::default() }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn custom_image(mut self, image: &str) -> Self {
        self.custom_image = image.to_string();
        self
    }

    pub fn edit(mut self, field: EditableField, value: &str) -> Self {
        self.edits.push((field, value.to_string()));
        self
    }

    pub fn decline(mut self) -> Self {
        self.confirm = false;
        self
    }

    pub fn interrupted(mut self) -> Self {
        self.interrupt_confirmation = true;
        self
    }
}

impl Prompter for Answers {
    fn project_name(&self, default_name: &str) -> Result<String, AppError> {
        Ok(self.name.clone().unwrap_or_else(|| default_name.to_string()))
    }

    fn select_template(&self, templates: &[Template]) -> Result<usize, AppError> {
        templates
            .iter()
            .position(|template| template.name == self.template)
            .ok_or_else(|| AppError::Prompt(format!("no template named {}", self.template)))
    }

    fn custom_image(&self) -> Result<String, AppError> {
        Ok(self.custom_image.clone())
    }

    fn edit_field(&self, field: EditableField, current: &str) -> Result<String, AppError> {
        self.seen_defaults.borrow_mut().push((field, current.to_string()));
        let edited = self.edits.iter().find(|(target, _)| *target == field);
        Ok(edited.map(|(_, value)| value.clone()).unwrap_or_else(|| current.to_string()))
    }

    fn confirm_write(&self, _config: &ResolvedConfiguration) -> Result<bool, AppError> {
        if self.interrupt_confirmation {
            return Err(AppError::Prompt("interrupted".to_string()));
        }
        Ok(self.confirm)
    }
}

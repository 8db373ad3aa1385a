//! Test double for `Prompter`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, EditableField, ResolvedConfiguration, Template};
use crate::ports::Prompter;

/// Prompter that answers from a prepared script.
///
/// Unset answers behave like a user pressing Enter: the default project name
/// is accepted, the first template is chosen and fields keep their seeded text.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    name: Option<String>,
    template: usize,
    custom_image: String,
    edits: HashMap<EditableField, String>,
    fail_on: Option<EditableField>,
    confirm: bool,
    reviewed: RefCell<Vec<EditableField>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn template(mut self, index: usize) -> Self {
        self.template = index;
        self
    }

    pub fn custom_image(mut self, image: &str) -> Self {
        self.custom_image = image.to_string();
        self
    }

    pub fn edit(mut self, field: EditableField, value: &str) -> Self {
        self.edits.insert(field, value.to_string());
        self
    }

    /// Report an input-collection error when `field` is reached.
    pub fn fail_on(mut self, field: EditableField) -> Self {
        self.fail_on = Some(field);
        self
    }

    pub fn confirm(mut self, answer: bool) -> Self {
        self.confirm = answer;
        self
    }

    pub fn reviewed_fields(&self) -> Vec<EditableField> {
        self.reviewed.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&self, default_name: &str) -> Result<String, AppError> {
        Ok(self.name.clone().unwrap_or_else(|| default_name.to_string()))
    }

    fn select_template(&self, _templates: &[Template]) -> Result<usize, AppError> {
        Ok(self.template)
    }

    fn custom_image(&self) -> Result<String, AppError> {
        Ok(self.custom_image.clone())
    }

    fn edit_field(&self, field: EditableField, current: &str) -> Result<String, AppError> {
        if self.fail_on == Some(field) {
            return Err(AppError::prompt_error("Scripted input interrupted"));
        }
        self.reviewed.borrow_mut().push(field);
        Ok(self.edits.get(&field).cloned().unwrap_or_else(|| current.to_string()))
    }

    fn confirm_write(&self, _config: &ResolvedConfiguration) -> Result<bool, AppError> {
        Ok(self.confirm)
    }
}

use dialoguer::{Confirm, Editor, Input, Select};

use crate::domain::{
    AppError, EditableField, ResolvedConfiguration, Template, require_custom_image,
    require_project_name,
};
use crate::ports::Prompter;

/// Answer used when the write confirmation is accepted with Enter.
const CONFIRM_WRITE_DEFAULT: bool = false;

/// Terminal form engine backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&self, default_name: &str) -> Result<String, AppError> {
        let mut input = Input::<String>::new()
            .with_prompt("Project Name (name for your development container)")
            .validate_with(|value: &String| require_project_name(value).map(|_| ()));
        if !default_name.is_empty() {
            input = input.default(default_name.to_string());
        }
        input
            .interact_text()
            .map_err(|e| AppError::prompt_error(format!("Failed to read project name: {e}")))
    }

    fn select_template(&self, templates: &[Template]) -> Result<usize, AppError> {
        let items: Vec<&str> = templates.iter().map(|template| template.name).collect();

        Select::new()
            .with_prompt("Select Base Image (or 'Custom Image' to specify your own)")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| AppError::prompt_error(format!("Failed to select base image: {e}")))
    }

    fn custom_image(&self) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt("Custom Image URL (without https://)")
            .validate_with(|value: &String| require_custom_image(value).map(|_| ()))
            .interact_text()
            .map_err(|e| AppError::prompt_error(format!("Failed to read custom image: {e}")))
    }

    fn begin_review(&self, prefilled: bool) {
        println!();
        println!("🔧 Configure Options");
        if prefilled {
            println!(
                "Default values have been filled in. Press Enter to accept or modify as needed."
            );
        }
        println!();
    }

    fn edit_field(&self, field: EditableField, current: &str) -> Result<String, AppError> {
        let read_error = |e: dialoguer::Error| {
            AppError::prompt_error(format!("Failed to read {}: {e}", field.title().to_lowercase()))
        };

        if field.is_multiline() {
            println!("{} ({})", field.title(), field.description());
            let edited = Editor::new().extension(".json").edit(current).map_err(read_error)?;
            return Ok(edited_or_current(edited, current));
        }

        Input::<String>::new()
            .with_prompt(format!("{} ({})", field.title(), field.description()))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(read_error)
    }

    fn confirm_write(&self, config: &ResolvedConfiguration) -> Result<bool, AppError> {
        println!();
        println!("📋 Configuration Summary");
        println!("Project Name: {}", config.name);
        println!("Image: {}", config.image);
        for field in EditableField::ALL {
            println!("{}: {}", field.title(), config.field(field));
        }
        println!();

        Confirm::new()
            .with_prompt("Create devcontainer.json with the above configuration?")
            .default(CONFIRM_WRITE_DEFAULT)
            .interact()
            .map_err(|e| AppError::prompt_error(format!("Failed to read confirmation: {e}")))
    }
}

/// An editor closed without saving keeps the previous text.
fn edited_or_current(edited: Option<String>, current: &str) -> String {
    edited.unwrap_or_else(|| current.to_string())
}

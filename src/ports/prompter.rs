//! Form engine boundary.
//!
//! Implementations collect raw values from the user and enforce field-level
//! validation before returning. Any `Err` ends the session without writing.

use crate::domain::{AppError, EditableField, ResolvedConfiguration, Template};

/// Port for interactive input collection.
pub trait Prompter {
    /// Ask for the project name. Must return a non-blank value.
    fn project_name(&self, default_name: &str) -> Result<String, AppError>;

    /// Pick one entry of `templates`, returning its position.
    fn select_template(&self, templates: &[Template]) -> Result<usize, AppError>;

    /// Ask for a custom image reference. Must return a non-blank value.
    fn custom_image(&self) -> Result<String, AppError>;

    /// Called once before the editable fields are reviewed.
    fn begin_review(&self, _prefilled: bool) {}

    /// Let the user edit one field, starting from `current`.
    fn edit_field(&self, field: EditableField, current: &str) -> Result<String, AppError>;

    /// Ask whether `config` should be written.
    fn confirm_write(&self, config: &ResolvedConfiguration) -> Result<bool, AppError>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn project_name(&self, default_name: &str) -> Result<String, AppError> {
        (**self).project_name(default_name)
    }

    fn select_template(&self, templates: &[Template]) -> Result<usize, AppError> {
        (**self).select_template(templates)
    }

    fn custom_image(&self) -> Result<String, AppError> {
        (**self).custom_image()
    }

    fn begin_review(&self, prefilled: bool) {
        (**self).begin_review(prefilled)
    }

    fn edit_field(&self, field: EditableField, current: &str) -> Result<String, AppError> {
        (**self).edit_field(field, current)
    }

    fn confirm_write(&self, config: &ResolvedConfiguration) -> Result<bool, AppError> {
        (**self).confirm_write(config)
    }
}

//! Selection & defaulting: the working state of one generation session.

use std::path::Path;

use super::{AppError, Template};

/// Mutable state of one generation session, prior to parsing.
///
/// `name` and `image` are always non-empty and trimmed. The four editable
/// fields hold raw text exactly as seeded or as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub name: String,
    pub image: String,
    pub ports: String,
    pub post_create_command: String,
    pub settings: String,
    pub features: String,
    pub confirmed: bool,
}

/// The overridable fields presented for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Ports,
    PostCreateCommand,
    Settings,
    Features,
}

impl EditableField {
    /// Review order.
    pub const ALL: [EditableField; 4] = [
        EditableField::Ports,
        EditableField::PostCreateCommand,
        EditableField::Settings,
        EditableField::Features,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EditableField::Ports => "Ports",
            EditableField::PostCreateCommand => "Post Create Command",
            EditableField::Settings => "Settings",
            EditableField::Features => "Features",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditableField::Ports => "Enter port numbers separated by commas (e.g., 3000,8080)",
            EditableField::PostCreateCommand => "Command to run after the container is created",
            EditableField::Settings => "VS Code settings in JSON format (optional)",
            EditableField::Features => "DevContainer features in JSON format (optional)",
        }
    }

    /// JSON fields are edited as multi-line text.
    pub fn is_multiline(&self) -> bool {
        matches!(self, EditableField::Settings | EditableField::Features)
    }
}

impl ResolvedConfiguration {
    /// Resolve the effective image and seed the editable fields from `template`.
    ///
    /// The custom sentinel takes its image from `custom_image` and starts with
    /// every editable field empty.
    pub fn from_selection(
        name: &str,
        template: &Template,
        custom_image: Option<&str>,
    ) -> Result<Self, AppError> {
        let name = require_project_name(name)?.to_string();

        if template.is_custom() {
            let image = require_custom_image(custom_image.unwrap_or_default())?.to_string();
            return Ok(Self { name, image, ..Self::default() });
        }

        Ok(Self {
            name,
            image: template.image.to_string(),
            ports: template.default_port.to_string(),
            post_create_command: template.post_create_command.to_string(),
            settings: template.settings.to_string(),
            features: template.features.to_string(),
            confirmed: false,
        })
    }

    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::Ports => &self.ports,
            EditableField::PostCreateCommand => &self.post_create_command,
            EditableField::Settings => &self.settings,
            EditableField::Features => &self.features,
        }
    }

    pub fn set_field(&mut self, field: EditableField, value: String) {
        let slot = match field {
            EditableField::Ports => &mut self.ports,
            EditableField::PostCreateCommand => &mut self.post_create_command,
            EditableField::Settings => &mut self.settings,
            EditableField::Features => &mut self.features,
        };
        *slot = value;
    }
}

/// Trimmed project name, rejecting blank input.
pub fn require_project_name(value: &str) -> Result<&str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("project name cannot be empty".to_string()));
    }
    Ok(trimmed)
}

/// Trimmed custom image reference, rejecting blank input.
pub fn require_custom_image(value: &str) -> Result<&str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "custom image URL cannot be empty when custom image is selected".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Final path segment of `dir`, or an empty string for a root path.
pub fn default_project_name(dir: &Path) -> String {
    dir.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

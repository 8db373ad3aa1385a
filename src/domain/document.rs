use serde::{Deserialize, Serialize};

use super::fields::{
    Features, Settings, discarded_ports, parse_features, parse_ports, parse_settings,
};
use super::{AppError, ResolvedConfiguration};

/// The `devcontainer.json` record. Optional fields that ended up empty are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevContainerDocument {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forward_ports: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_create_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
}

impl DevContainerDocument {
    /// Assemble the document from already-parsed field values.
    pub fn assemble(
        config: &ResolvedConfiguration,
        forward_ports: Vec<i64>,
        settings: Option<Settings>,
        features: Option<Features>,
    ) -> Self {
        let post_create_command = Some(config.post_create_command.as_str())
            .filter(|command| !command.trim().is_empty())
            .map(str::to_string);

        Self {
            name: config.name.clone(),
            image: config.image.clone(),
            forward_ports,
            post_create_command,
            settings: settings.filter(|settings| !settings.is_empty()),
            features: features.filter(|features| !features.is_empty()),
        }
    }

    /// Parse every editable field of `config` and assemble the document.
    pub fn build(config: &ResolvedConfiguration) -> Self {
        Self::assemble(
            config,
            parse_ports(&config.ports),
            parse_settings(&config.settings),
            parse_features(&config.features),
        )
    }

    /// Serialize with two-space indentation.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Describe optional input that [`DevContainerDocument::build`] will drop.
pub fn parse_warnings(config: &ResolvedConfiguration) -> Vec<String> {
    let mut warnings: Vec<String> = discarded_ports(&config.ports)
        .into_iter()
        .map(|entry| format!("Ignored port '{entry}': not an integer"))
        .collect();

    if !config.settings.trim().is_empty() && parse_settings(&config.settings).is_none() {
        warnings.push("Settings omitted: not a valid JSON object".to_string());
    }
    if !config.features.trim().is_empty() && parse_features(&config.features).is_none() {
        warnings.push("Features omitted: expected a JSON object of objects".to_string());
    }
    warnings
}

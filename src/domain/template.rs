use super::AppError;

/// One predefined environment preset.
///
/// Defaults are kept as raw text; they are only parsed after the user has had
/// a chance to edit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Display name, unique within the catalog.
    pub name: &'static str,
    /// Image reference. Empty only for the custom sentinel.
    pub image: &'static str,
    /// Default forwarded port(s), comma separated.
    pub default_port: &'static str,
    pub post_create_command: &'static str,
    /// Editor settings as JSON text.
    pub settings: &'static str,
    /// Feature set as JSON text.
    pub features: &'static str,
}

/// Display name of the "no preset" entry.
pub const CUSTOM_TEMPLATE_NAME: &str = "Custom Image";

const GIT_AND_COMMON_UTILS: &str = r#"{"ghcr.io/devcontainers/features/git:1": {}, "ghcr.io/devcontainers/features/common-utils:2": {}}"#;

const CATALOG: [Template; 8] = [
    Template {
        name: "Bun (Latest)",
        image: "oven/bun:latest",
        default_port: "3000",
        post_create_command: "bun install",
        settings: r#"{"terminal.integrated.shell.linux": "/bin/bash"}"#,
        features: GIT_AND_COMMON_UTILS,
    },
    Template {
        name: "Node.js (Latest)",
        image: "mcr.microsoft.com/devcontainers/javascript-node:latest",
        default_port: "3000",
        post_create_command: "npm install",
        settings: r#"{"terminal.integrated.shell.linux": "/bin/bash"}"#,
        features: GIT_AND_COMMON_UTILS,
    },
    Template {
        name: "PHP 8.2 (Composer + Symfony)",
        image: "mcr.microsoft.com/devcontainers/php:8.2",
        default_port: "8000",
        post_create_command: "composer install && symfony check:requirements",
        settings: r#"{"php.validate.executablePath": "/usr/local/bin/php"}"#,
        features: r#"{"ghcr.io/devcontainers/features/composer:2": {}, "ghcr.io/devcontainers/features/node:1": {"version": "20"}, "ghcr.io/devcontainers/features/git:1": {}}"#,
    },
    Template {
        name: "Go (Alpine)",
        image: "golang:alpine",
        default_port: "8080",
        post_create_command: "go mod download",
        settings: r#"{"go.goroot": "/usr/local/go", "go.gopath": "/go"}"#,
        features: r#"{"ghcr.io/devcontainers/features/git:1": {}}"#,
    },
    Template {
        name: "Rust (Latest)",
        image: "mcr.microsoft.com/devcontainers/rust:latest",
        default_port: "8000",
        post_create_command: "cargo build",
        settings: r#"{"rust-analyzer.server.path": "/usr/local/bin/rust-analyzer"}"#,
        features: GIT_AND_COMMON_UTILS,
    },
    Template {
        name: "Python 3.12",
        image: "mcr.microsoft.com/devcontainers/python:latest",
        default_port: "8000",
        post_create_command: "pip install -r requirements.txt",
        settings: r#"{"python.defaultInterpreterPath": "/usr/local/bin/python"}"#,
        features: GIT_AND_COMMON_UTILS,
    },
    Template {
        name: ".NET 8",
        image: "mcr.microsoft.com/devcontainers/dotnet:8.0",
        default_port: "5000",
        post_create_command: "dotnet restore",
        settings: r#"{"dotnet.server.useOmnisharp": false, "dotnet.defaultSolution": "**/*.sln"}"#,
        features: r#"{"ghcr.io/devcontainers/features/dotnet:2": {}, "ghcr.io/devcontainers/features/git:1": {}, "ghcr.io/devcontainers/features/common-utils:2": {}}"#,
    },
    Template {
        name: CUSTOM_TEMPLATE_NAME,
        image: "",
        default_port: "",
        post_create_command: "",
        settings: "",
        features: "",
    },
];

/// The template catalog in display order. The custom sentinel is always last.
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// Look up a template by its position in the catalog.
pub fn template_at(index: usize) -> Result<&'static Template, AppError> {
    CATALOG.get(index).ok_or(AppError::TemplateOutOfRange { index, len: CATALOG.len() })
}

impl Template {
    /// Whether this is the "no preset" entry that requires a user-supplied image.
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_TEMPLATE_NAME
    }
}

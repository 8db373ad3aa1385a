pub mod document;
pub mod error;
pub mod fields;
pub mod paths;
pub mod session;
pub mod stage;
pub mod template;

pub use document::{DevContainerDocument, parse_warnings};
pub use error::AppError;
pub use fields::{Features, Settings, discarded_ports, parse_features, parse_ports, parse_settings};
pub use paths::devcontainer_json;
pub use session::{
    EditableField, ResolvedConfiguration, default_project_name, require_custom_image,
    require_project_name,
};
pub use stage::Stage;
pub use template::{CUSTOM_TEMPLATE_NAME, Template, catalog, template_at};

//! Tool settings (`routegen.toml` at the repository root).

use std::path::{Component, Path};

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::uri_config::DEFAULT_URI_CONFIG_PATH;

/// Settings file name, looked up at the repository root.
pub const SETTINGS_FILE: &str = "routegen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldSettings {
    /// Directory holding `hooks/`, `routes/` and `config/`.
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// URI config path, relative to `source_root`.
    #[serde(default = "default_uri_config")]
    pub uri_config: String,
}

fn default_source_root() -> String {
    ".".to_string()
}

fn default_uri_config() -> String {
    DEFAULT_URI_CONFIG_PATH.to_string()
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self { source_root: default_source_root(), uri_config: default_uri_config() }
    }
}

impl ScaffoldSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_relative("source_root", &self.source_root)?;
        validate_relative("uri_config", &self.uri_config)?;
        if !names_file(&self.uri_config) {
            return Err(AppError::config_error(format!(
                "uri_config must name a file: {}",
                self.uri_config
            )));
        }
        Ok(())
    }

    /// Repository-relative path for a source-root relative path.
    pub fn source_path(&self, relative: &str) -> String {
        let root = self.source_root.trim_end_matches('/');
        if root.is_empty() || root == "." {
            relative.to_string()
        } else {
            format!("{root}/{relative}")
        }
    }

    /// Repository-relative path of the URI config.
    pub fn uri_config_path(&self) -> String {
        self.source_path(&self.uri_config)
    }
}

fn validate_relative(field: &str, value: &str) -> Result<(), AppError> {
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(AppError::config_error(format!(
            "{field} must be relative to the repository root: {value}"
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::config_error(format!("{field} must not contain '..': {value}")));
    }
    Ok(())
}

/// True when the last component of `value` is a file name, not a directory
/// marker such as a trailing `/` or `.`.
fn names_file(value: &str) -> bool {
    if value.ends_with('/') || value.ends_with("/.") || value == "." {
        return false;
    }
    matches!(Path::new(value).components().next_back(), Some(Component::Normal(_)))
}

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<ScaffoldSettings, AppError> {
    let settings: ScaffoldSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

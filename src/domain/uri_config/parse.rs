//! Pure parse/serialize for the URI config document.

use super::UriConfig;
use crate::domain::AppError;

/// Parse the URI config from JSON content.
///
/// Whitespace-only content counts as no prior state. Anything else that is
/// not a JSON object with string-valued mappings is `ConfigCorrupt`.
pub fn parse_uri_config(content: &str, path: &str) -> Result<UriConfig, AppError> {
    if content.trim().is_empty() {
        return Ok(UriConfig::default());
    }
    serde_json::from_str(content)
        .map_err(|err| AppError::ConfigCorrupt { path: path.to_string(), details: err.to_string() })
}

/// Serialize the URI config as pretty-printed JSON with a trailing newline.
///
/// Output order follows first insertion, so repeated calls on the same
/// store are byte-identical.
pub fn serialize_uri_config(config: &UriConfig) -> Result<String, AppError> {
    let mut content = serde_json::to_string_pretty(config)
        .map_err(|err| AppError::config_error(format!("Failed to serialize URI config: {err}")))?;
    content.push('\n');
    Ok(content)
}

//! Tool settings loading from the repository root.

use crate::domain::settings::parse_settings_content;
use crate::domain::{AppError, SETTINGS_FILE, ScaffoldSettings};
use crate::ports::RepositoryFilesystem;

/// Load `routegen.toml`, falling back to defaults when it does not exist.
pub fn load_settings<W: RepositoryFilesystem>(
    repository: &W,
) -> Result<ScaffoldSettings, AppError> {
    if !repository.file_exists(SETTINGS_FILE) {
        return Ok(ScaffoldSettings::default());
    }

    let content = repository.read_file(SETTINGS_FILE)?;
    parse_settings_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockRepositoryFs, TestFiles};

    #[test]
    fn missing_settings_file_yields_defaults() {
        let repository = MockRepositoryFs::new(TestFiles::new());
        assert_eq!(load_settings(&repository).unwrap(), ScaffoldSettings::default());
    }

    #[test]
    fn settings_file_overrides_source_root() {
        let files = TestFiles::new();
        files.add(SETTINGS_FILE, "source_root = \"gateway/src\"\n");
        let repository = MockRepositoryFs::new(files);

        let settings = load_settings(&repository).unwrap();
        assert_eq!(settings.uri_config_path(), "gateway/src/config/appUriConfig.json");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let files = TestFiles::new();
        files.add(SETTINGS_FILE, "source_root = [");
        let repository = MockRepositoryFs::new(files);

        assert!(matches!(load_settings(&repository), Err(AppError::TomlParseError(_))));
    }
}

//! Load and persist the URI config through the repository port.

use std::io;

use tracing::debug;

use crate::domain::uri_config::parse::{parse_uri_config, serialize_uri_config};
use crate::domain::{AppError, UriConfig};
use crate::ports::RepositoryFilesystem;

/// Load the URI config at `path`, or an empty store when the file is absent.
///
/// A directory at `path` is a configuration error; content that is not UTF-8
/// is `ConfigCorrupt`.
pub fn load_uri_config<W: RepositoryFilesystem>(
    repository: &W,
    path: &str,
) -> Result<UriConfig, AppError> {
    if repository.is_dir(path) {
        return Err(AppError::config_error(format!(
            "URI config path {path} is a directory, not a file"
        )));
    }
    if !repository.file_exists(path) {
        debug!(path, "no URI config yet, starting empty");
        return Ok(UriConfig::default());
    }

    let content = match repository.read_file(path) {
        Ok(content) => content,
        Err(AppError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            return Err(AppError::ConfigCorrupt {
                path: path.to_string(),
                details: err.to_string(),
            });
        }
        Err(err) => return Err(err),
    };
    let config = parse_uri_config(&content, path)?;
    debug!(
        path,
        gateway_entries = config.gateway_api_uri.len(),
        microservices_entries = config.microservices_api_uri.len(),
        "loaded URI config"
    );
    Ok(config)
}

/// Rewrite the URI config at `path` wholesale.
pub fn persist_uri_config<W: RepositoryFilesystem>(
    repository: &W,
    path: &str,
    config: &UriConfig,
) -> Result<(), AppError> {
    let content = serialize_uri_config(config)?;
    repository.replace_file(path, &content)
}

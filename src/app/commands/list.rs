//! Read-only view of the persisted URI config.

use crate::app::config::{load_settings, load_uri_config};
use crate::domain::{AppError, UriPair};
use crate::ports::RepositoryFilesystem;

#[derive(Debug, Clone)]
pub struct UriConfigListing {
    pub uri_config_path: String,
    /// False when no store has been written yet.
    pub exists: bool,
    pub pairs: Vec<UriPair>,
}

/// Load the store named by the settings and group its entries per service.
pub fn execute<W: RepositoryFilesystem>(repository: &W) -> Result<UriConfigListing, AppError> {
    let settings = load_settings(repository)?;
    let uri_config_path = settings.uri_config_path();
    let exists = repository.file_exists(&uri_config_path);
    let config = load_uri_config(repository, &uri_config_path)?;

    Ok(UriConfigListing { uri_config_path, exists, pairs: config.pairs() })
}

//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{EmbeddedArtifactTemplates, FilesystemStore};
use crate::app::{
    AppContext,
    commands::{list, scaffold},
};

pub use crate::app::commands::{ScaffoldInput, ScaffoldOptions, ScaffoldOutcome, UriConfigListing};
pub use crate::domain::AppError;

/// Create an `AppContext` for a given repository root.
fn create_context(
    root: PathBuf,
) -> Result<AppContext<FilesystemStore, EmbeddedArtifactTemplates>, AppError> {
    let repository = FilesystemStore::new(root);
    let templates = EmbeddedArtifactTemplates::new()?;
    Ok(AppContext::new(repository, templates))
}

// =============================================================================
// Scaffold Command API
// =============================================================================

/// Scaffold a service in the current directory.
pub fn scaffold(
    input: &ScaffoldInput,
    options: ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError> {
    scaffold_at(std::env::current_dir()?, input, options)
}

/// Scaffold a service under the specified repository root.
///
/// Writes the request hook, response hook and router, then rewrites the URI
/// config with the service's two entries merged in.
pub fn scaffold_at(
    root: impl Into<PathBuf>,
    input: &ScaffoldInput,
    options: ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError> {
    let ctx = create_context(root.into())?;
    scaffold::execute(&ctx, input, options)
}

// =============================================================================
// List Command API
// =============================================================================

/// List URI config entries in the current directory.
pub fn list() -> Result<UriConfigListing, AppError> {
    list_at(std::env::current_dir()?)
}

/// List URI config entries under the specified repository root.
pub fn list_at(root: impl Into<PathBuf>) -> Result<UriConfigListing, AppError> {
    list::execute(&FilesystemStore::new(root.into()))
}

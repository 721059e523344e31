//! Scaffold a service: hook stubs, router, and URI config entries.
//!
//! Pipeline: validate input → normalize names → derive keys → load store →
//! merge → render artifacts → write artifacts → persist store.
//!
//! Every validation, load, merge and render step finishes before the first
//! write, so bad input or a corrupt store never leaves files behind. Writes
//! themselves are not transactional: if one fails, artifacts already written
//! in this run stay on disk and the store is not persisted.

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::app::config::{load_settings, load_uri_config, persist_uri_config};
use crate::app::services::emit;
use crate::domain::artifact::layout;
use crate::domain::{AppError, ConfigKeys, EntryChange, MergeOutcome, ServiceSpec};
use crate::ports::{ArtifactTemplates, RepositoryFilesystem};

/// Raw operator input, as typed or passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldInput {
    pub name: String,
    pub sub_name: Option<String>,
    pub gateway_url: String,
    pub microservices_url: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Run every step except the filesystem writes.
    pub dry_run: bool,
}

/// What a scaffold operation did (or would do, for a dry run).
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub spec: ServiceSpec,
    pub keys: ConfigKeys,
    pub merge: MergeOutcome,
    /// Repository-relative artifact paths, in write order.
    pub artifacts: Vec<String>,
    /// Directories that did not exist before this run.
    pub created_dirs: Vec<String>,
    pub uri_config_path: String,
    pub dry_run: bool,
}

pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    input: &ScaffoldInput,
    options: ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError>
where
    W: RepositoryFilesystem,
    T: ArtifactTemplates,
{
    let spec = ServiceSpec::from_raw(&input.name, input.sub_name.as_deref())?;
    let gateway_url = required(&input.gateway_url, "gateway URL")?;
    let microservices_url = required(&input.microservices_url, "microservices URL")?;
    let keys = spec.keys();
    debug!(
        service = %spec,
        gateway_key = %keys.gateway,
        microservices_key = %keys.microservices,
        "resolved service"
    );

    let repository = ctx.repository();
    let settings = load_settings(repository)?;
    let uri_config_path = settings.uri_config_path();

    let mut uri_config = load_uri_config(repository, &uri_config_path)?;
    let merge = uri_config.merge(&keys, gateway_url, microservices_url);
    warn_on_replacement(&keys.gateway, &merge.gateway);
    warn_on_replacement(&keys.microservices, &merge.microservices);

    let artifacts = emit(ctx.templates(), &spec, &keys)?;
    let paths: Vec<String> =
        artifacts.iter().map(|a| settings.source_path(&a.relative_path())).collect();

    let mut required_dirs = vec![
        settings.source_path(&layout::hook_dir(&spec)),
        settings.source_path(layout::ROUTES_DIR),
    ];
    if let Some((parent, _)) = uri_config_path.rsplit_once('/') {
        required_dirs.push(parent.to_string());
    }
    let created_dirs: Vec<String> =
        required_dirs.into_iter().filter(|dir| !repository.is_dir(dir)).collect();

    if options.dry_run {
        debug!(artifacts = ?paths, "dry run, skipping writes");
    } else {
        for dir in &created_dirs {
            repository.create_dir_all(dir)?;
        }

        let mut written: Vec<&str> = Vec::new();
        for (artifact, path) in artifacts.iter().zip(&paths) {
            if let Err(err) = repository.write_file(path, &artifact.content) {
                warn!(
                    failed = %path,
                    already_written = ?written,
                    "aborting scaffold; written files are left in place"
                );
                return Err(err);
            }
            debug!(kind = artifact.kind.display_name(), path = %path, "wrote artifact");
            written.push(path);
        }

        persist_uri_config(repository, &uri_config_path, &uri_config)?;
        info!(service = %spec, path = %uri_config_path, "persisted URI config");
    }

    Ok(ScaffoldOutcome {
        spec,
        keys,
        merge,
        artifacts: paths,
        created_dirs,
        uri_config_path,
        dry_run: options.dry_run,
    })
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_input(field));
    }
    Ok(trimmed)
}

fn warn_on_replacement(key: &str, change: &EntryChange) {
    if let EntryChange::Replaced { previous } = change {
        warn!(key, previous = %previous, "replacing existing URI (last write wins)");
    }
}

use crate::ports::{ArtifactTemplates, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: RepositoryFilesystem, T: ArtifactTemplates> {
    repository: W,
    templates: T,
}

impl<W: RepositoryFilesystem, T: ArtifactTemplates> AppContext<W, T> {
    /// Create a new application context.
    pub fn new(repository: W, templates: T) -> Self {
        Self { repository, templates }
    }

    /// Get a reference to the repository filesystem.
    pub fn repository(&self) -> &W {
        &self.repository
    }

    /// Get a reference to the artifact templates.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}

mod artifact_templates;
mod repository_filesystem;

pub use artifact_templates::ArtifactTemplates;
pub use repository_filesystem::RepositoryFilesystem;

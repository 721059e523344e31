pub mod embedded_artifact_templates;
pub mod filesystem;

pub use embedded_artifact_templates::EmbeddedArtifactTemplates;
pub use filesystem::FilesystemStore;

use crate::domain::{AppError, ArtifactContext, ArtifactKind};

/// Port for rendering generated artifact content.
///
/// Rendering must be deterministic: identical context, identical output.
pub trait ArtifactTemplates {
    fn render(&self, kind: ArtifactKind, context: &ArtifactContext) -> Result<String, AppError>;
}

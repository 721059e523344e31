use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, ArtifactContext, ArtifactKind};
use crate::ports::ArtifactTemplates;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Artifact templates compiled into the binary, rendered with Minijinja.
pub struct EmbeddedArtifactTemplates {
    env: Environment<'static>,
}

impl EmbeddedArtifactTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for kind in ArtifactKind::ALL {
            let name = kind.template_name();
            let source = TEMPLATES_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::TemplateRender {
                    template: name.to_string(),
                    reason: "missing embedded template".to_string(),
                })?;
            env.add_template(name, source).map_err(|err| template_error(name, err))?;
        }

        Ok(Self { env })
    }
}

impl ArtifactTemplates for EmbeddedArtifactTemplates {
    fn render(&self, kind: ArtifactKind, context: &ArtifactContext) -> Result<String, AppError> {
        let name = kind.template_name();
        let template = self.env.get_template(name).map_err(|err| template_error(name, err))?;
        template.render(context).map_err(|err| template_error(name, err))
    }
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}

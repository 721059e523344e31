pub mod artifact;
pub mod error;
pub mod identities;
pub mod service;
pub mod settings;
pub mod uri_config;

pub use artifact::{ArtifactContext, ArtifactKind, GeneratedArtifact};
pub use error::AppError;
pub use identities::ServiceName;
pub use service::{ConfigKeys, ServiceSpec};
pub use settings::{SETTINGS_FILE, ScaffoldSettings};
pub use uri_config::{EntryChange, MergeOutcome, UriConfig, UriPair};
